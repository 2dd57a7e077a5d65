// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod animated_spinner;
pub mod panorama_shader;

pub use animated_spinner::AnimatedSpinner;
pub use panorama_shader::PanoramaScene;
