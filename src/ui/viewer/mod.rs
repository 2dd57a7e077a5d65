// SPDX-License-Identifier: MPL-2.0
//! Panorama viewer screen.
//!
//! - [`component`]: state machine and camera control
//! - [`state`]: loading / ready / failed phases
//! - [`shell`]: loading spinner, error panel or panorama with overlays

pub mod component;
pub mod shell;
pub mod state;

pub use component::{Effect, Message, State};
pub use state::{LoadedPlace, Phase, TextureState};
