// SPDX-License-Identifier: MPL-2.0
//! GPU panorama rendering using a custom wgpu shader.
//!
//! The equirectangular image is uploaded once into a persistent GPU texture
//! and the sphere is drawn by a fragment shader that turns each pixel into a
//! view ray. Camera moves only rewrite a 32-byte uniform buffer, so dragging
//! and zooming never touch the texture.
//!
//! Creating an `image::Handle` per camera move would instead generate a new
//! handle id each time and recreate the GPU texture.

use crate::application::port::ViewportState;
use crate::domain::EquirectImage;
use crate::panorama::CameraUniforms;
use iced::widget::shader::{self, Viewport};
use iced::{mouse, Element, Length, Rectangle};
use wgpu;

/// What the shader draws: the panorama and the camera looking at it.
#[derive(Debug, Clone)]
pub struct PanoramaScene {
    pub image: EquirectImage,
    pub camera: ViewportState,
    /// Fixed rotation of the sphere around the vertical axis.
    pub sphere_yaw: f32,
}

impl PanoramaScene {
    /// Uniforms for a widget of the given bounds.
    #[must_use]
    pub fn uniforms(&self, bounds: Rectangle) -> CameraUniforms {
        CameraUniforms::new(self.camera, self.sphere_yaw, bounds.width / bounds.height)
    }

    /// A widget filling the available space.
    pub fn view<'a, Message>(&self) -> Element<'a, Message>
    where
        Message: 'static,
    {
        shader::Shader::new(PanoramaProgram {
            scene: self.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

#[derive(Debug, Clone)]
struct PanoramaProgram {
    scene: PanoramaScene,
}

impl<Message> shader::Program<Message> for PanoramaProgram {
    type State = ();
    type Primitive = PanoramaPrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        bounds: Rectangle,
    ) -> Self::Primitive {
        PanoramaPrimitive {
            image: self.scene.image.clone(),
            uniforms: self.scene.uniforms(bounds),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanoramaPrimitive {
    image: EquirectImage,
    uniforms: CameraUniforms,
}

impl shader::Primitive for PanoramaPrimitive {
    type Pipeline = PanoramaPipeline;

    fn prepare(
        &self,
        pipeline: &mut Self::Pipeline,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        viewport: &Viewport,
    ) {
        pipeline.store_physical_bounds(bounds, viewport);
        pipeline.upload_texture(device, queue, &self.image);
        queue.write_buffer(
            &pipeline.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.uniforms),
        );
    }

    fn render(
        &self,
        pipeline: &Self::Pipeline,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        pipeline.render(encoder, target, clip_bounds);
    }
}

pub struct PanoramaPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    uniform_buffer: wgpu::Buffer,
    texture: Option<wgpu::Texture>,
    bind_group: Option<wgpu::BindGroup>,
    /// Id of the image currently held by `texture`.
    texture_image_id: Option<u64>,
    widget_physical_bounds: Rectangle<f32>,
}

impl shader::Pipeline for PanoramaPipeline {
    fn new(device: &wgpu::Device, _queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Panorama Shader"),
            source: wgpu::ShaderSource::Wgsl(PANORAMA_SHADER.into()),
        });

        // Longitude wraps around, latitude stops at the poles
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Panorama Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Panorama Camera Uniforms"),
            size: std::mem::size_of::<CameraUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Panorama Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Panorama Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Panorama Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            sampler,
            uniform_buffer,
            texture: None,
            bind_group: None,
            texture_image_id: None,
            widget_physical_bounds: Rectangle::default(),
        }
    }
}

impl PanoramaPipeline {
    fn store_physical_bounds(&mut self, bounds: &Rectangle, viewport: &Viewport) {
        let scale = viewport.scale_factor();
        self.widget_physical_bounds = Rectangle {
            x: bounds.x * scale,
            y: bounds.y * scale,
            width: bounds.width * scale,
            height: bounds.height * scale,
        };
    }

    /// Uploads `image` unless it is already on the GPU.
    fn upload_texture(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, image: &EquirectImage) {
        if self.texture_image_id == Some(image.id()) {
            return;
        }

        let size = wgpu::Extent3d {
            width: image.width(),
            height: image.height(),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Panorama Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            // Decoded JPEG/PNG bytes are already gamma-encoded
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.rgba_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width() * 4),
                rows_per_image: Some(image.height()),
            },
            size,
        );

        let texture_view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Panorama Bind Group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
            ],
        });

        self.texture = Some(texture);
        self.bind_group = Some(bind_group);
        self.texture_image_id = Some(image.id());
    }

    fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        let Some(ref bind_group) = self.bind_group else {
            return;
        };

        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Panorama Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, bind_group, &[]);

        let wb = &self.widget_physical_bounds;
        render_pass.set_viewport(wb.x, wb.y, wb.width, wb.height, 0.0, 1.0);
        render_pass.set_scissor_rect(
            clip_bounds.x,
            clip_bounds.y,
            clip_bounds.width,
            clip_bounds.height,
        );

        render_pass.draw(0..4, 0..1);
    }
}

/// WGSL panorama shader.
///
/// A fullscreen quad carries normalized device coordinates to the fragment
/// stage, which follows `CameraUniforms::texture_uv`: build the view ray,
/// apply pitch then yaw, convert to longitude and latitude.
const PANORAMA_SHADER: &str = r#"
const PI: f32 = 3.14159265358979;
const TAU: f32 = 6.28318530717959;

struct Camera {
    yaw: f32,
    pitch: f32,
    tan_half_fov: f32,
    aspect: f32,
    sphere_yaw: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
}

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
    @location(0) ndc: vec2<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    // Triangle strip: top-left, top-right, bottom-left, bottom-right
    let x = f32(vertex_index & 1u);
    let y = f32(vertex_index >> 1u);
    let ndc = vec2<f32>(x * 2.0 - 1.0, 1.0 - y * 2.0);

    var output: VertexOutput;
    output.position = vec4<f32>(ndc, 0.0, 1.0);
    output.ndc = ndc;
    return output;
}

@group(0) @binding(0)
var panorama_texture: texture_2d<f32>;
@group(0) @binding(1)
var panorama_sampler: sampler;
@group(0) @binding(2)
var<uniform> camera: Camera;

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let ray = normalize(vec3<f32>(
        input.ndc.x * camera.tan_half_fov * camera.aspect,
        input.ndc.y * camera.tan_half_fov,
        -1.0,
    ));

    let cos_pitch = cos(camera.pitch);
    let sin_pitch = sin(camera.pitch);
    let y1 = ray.y * cos_pitch - ray.z * sin_pitch;
    let z1 = ray.y * sin_pitch + ray.z * cos_pitch;

    let cos_yaw = cos(camera.yaw);
    let sin_yaw = sin(camera.yaw);
    let x2 = ray.x * cos_yaw - z1 * sin_yaw;
    let z2 = ray.x * sin_yaw + z1 * cos_yaw;

    let longitude = atan2(x2, -z2) + camera.sphere_yaw;
    let latitude = asin(clamp(y1, -1.0, 1.0));
    let uv = vec2<f32>(fract(longitude / TAU + 0.5), 0.5 - latitude / PI);

    // Explicit level: the longitude seam would break implicit derivatives
    return textureSampleLevel(panorama_texture, panorama_sampler, uv, 0.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldOfView, ViewOrientation};

    fn scene() -> PanoramaScene {
        PanoramaScene {
            image: EquirectImage::from_rgba(4, 2, vec![0; 4 * 2 * 4]).expect("valid image"),
            camera: ViewportState {
                field_of_view: FieldOfView::new(60.0),
                orientation: ViewOrientation::new(0.3, -0.2),
            },
            sphere_yaw: 1.0,
        }
    }

    #[test]
    fn uniforms_follow_widget_shape_and_camera() {
        let uniforms = scene().uniforms(Rectangle::new(
            iced::Point::ORIGIN,
            iced::Size::new(1600.0, 800.0),
        ));
        assert_eq!(uniforms.aspect, 2.0);
        assert_eq!(uniforms.yaw, 0.3);
        assert_eq!(uniforms.pitch, -0.2);
        assert_eq!(uniforms.sphere_yaw, 1.0);
        assert!((uniforms.tan_half_fov - 30f32.to_radians().tan()).abs() < 1e-6);
    }

    #[test]
    fn collapsed_bounds_keep_a_usable_aspect() {
        let uniforms = scene().uniforms(Rectangle::new(iced::Point::ORIGIN, iced::Size::ZERO));
        assert_eq!(uniforms.aspect, 1.0);
    }

    #[test]
    fn primitive_shares_the_decoded_texture() {
        let scene = scene();
        let primitive = <PanoramaProgram as shader::Program<()>>::draw(
            &PanoramaProgram {
                scene: scene.clone(),
            },
            &(),
            mouse::Cursor::Unavailable,
            Rectangle::new(iced::Point::ORIGIN, iced::Size::new(10.0, 10.0)),
        );
        assert_eq!(primitive.image.id(), scene.image.id());
    }

    #[test]
    fn shader_declares_the_uniform_layout() {
        for field in ["yaw", "pitch", "tan_half_fov", "aspect", "sphere_yaw"] {
            assert!(PANORAMA_SHADER.contains(&format!("    {field}: f32,")));
        }
        assert!(PANORAMA_SHADER.contains("fn vs_main"));
        assert!(PANORAMA_SHADER.contains("fn fs_main"));
    }
}
