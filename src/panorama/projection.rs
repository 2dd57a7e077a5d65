// SPDX-License-Identifier: MPL-2.0
//! Equirectangular to rectilinear projection math.
//!
//! Camera space follows the usual graphics convention: x right, y up, the
//! camera looks down -z. Pitch rotates around x, then yaw around y. A world
//! direction maps to longitude `atan2(x, -z)` and latitude `asin(y)`.
//!
//! The fragment shader in [`crate::ui::widgets::panorama_shader`] runs the
//! same steps per pixel; the functions here are the CPU reference for it.

use crate::application::port::ViewportState;
use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

/// Camera parameters uploaded to the GPU once per frame.
///
/// Layout matches the `Camera` struct of the WGSL shader: eight `f32`
/// fields, 32 bytes, the last three are padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CameraUniforms {
    pub yaw: f32,
    pub pitch: f32,
    /// Tangent of half the vertical field of view.
    pub tan_half_fov: f32,
    /// Viewport width over height.
    pub aspect: f32,
    /// Fixed rotation of the sphere around the vertical axis.
    pub sphere_yaw: f32,
    _padding: [f32; 3],
}

impl CameraUniforms {
    #[must_use]
    pub fn new(state: ViewportState, sphere_yaw: f32, aspect: f32) -> Self {
        Self {
            yaw: state.orientation.yaw(),
            pitch: state.orientation.pitch(),
            tan_half_fov: (state.field_of_view.radians() / 2.0).tan(),
            aspect: sanitize_aspect(aspect),
            sphere_yaw,
            _padding: [0.0; 3],
        }
    }

    /// Same parameters for a viewport of another shape.
    #[must_use]
    pub fn with_aspect(self, aspect: f32) -> Self {
        Self {
            aspect: sanitize_aspect(aspect),
            ..self
        }
    }

    /// World direction seen through a point of the viewport, in normalized
    /// device coordinates (`-1..1`, y up).
    #[must_use]
    pub fn view_direction(&self, ndc_x: f32, ndc_y: f32) -> [f32; 3] {
        let ray = normalize([
            ndc_x * self.tan_half_fov * self.aspect,
            ndc_y * self.tan_half_fov,
            -1.0,
        ]);
        rotate(ray, self.yaw, self.pitch)
    }

    /// Texture coordinates sampled at a point of the viewport.
    #[must_use]
    pub fn texture_uv(&self, ndc_x: f32, ndc_y: f32) -> (f32, f32) {
        direction_to_uv(self.view_direction(ndc_x, ndc_y), self.sphere_yaw)
    }
}

fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

/// Maps a unit world direction to texture coordinates in `[0, 1)`.
#[must_use]
pub fn direction_to_uv(direction: [f32; 3], sphere_yaw: f32) -> (f32, f32) {
    let [x, y, z] = direction;
    let longitude = x.atan2(-z) + sphere_yaw;
    let latitude = y.clamp(-1.0, 1.0).asin();
    let u = (longitude / TAU + 0.5).rem_euclid(1.0);
    let v = 0.5 - latitude / PI;
    (u, v)
}

/// Pitch around x (positive raises the forward vector), then yaw around y
/// (positive turns it to the right).
fn rotate([x, y, z]: [f32; 3], yaw: f32, pitch: f32) -> [f32; 3] {
    let (sin_pitch, cos_pitch) = pitch.sin_cos();
    let y1 = y * cos_pitch - z * sin_pitch;
    let z1 = y * sin_pitch + z * cos_pitch;
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    let x2 = x * cos_yaw - z1 * sin_yaw;
    let z2 = x * sin_yaw + z1 * cos_yaw;
    [x2, y1, z2]
}

fn normalize([x, y, z]: [f32; 3]) -> [f32; 3] {
    let length = (x * x + y * y + z * z).sqrt();
    if length == 0.0 {
        return [0.0, 0.0, -1.0];
    }
    [x / length, y / length, z / length]
}
