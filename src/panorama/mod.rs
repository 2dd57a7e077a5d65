// SPDX-License-Identifier: MPL-2.0
//! Panorama camera, projection and texture preparation.
//!
//! An equirectangular image is treated as the inside of a sphere around the
//! camera. Drawing happens on the GPU (see
//! [`crate::ui::widgets::panorama_shader`]); this module owns everything the
//! shader is fed with.
//!
//! - [`camera`]: orbit camera implementing the viewport port
//! - [`projection`]: camera uniforms and the reference projection math
//! - [`texture`]: decoding downloaded bytes into an [`EquirectImage`]
//!
//! [`EquirectImage`]: crate::domain::EquirectImage

pub mod camera;
pub mod projection;
pub mod texture;

pub use camera::OrbitCamera;
pub use projection::{direction_to_uv, CameraUniforms};
pub use texture::decode_panorama;
