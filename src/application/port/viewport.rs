// SPDX-License-Identifier: MPL-2.0
//! Viewport control port definition.
//!
//! The viewer component drives the camera exclusively through
//! [`ViewportController`]. The panorama shader receives the resulting
//! [`ViewportState`] as uniforms, so the navigation shell never touches
//! rendering internals.
//!
//! # Design Notes
//!
//! - The controller is **stateful**: it owns field of view and orientation
//! - Methods are synchronous and cheap; rendering happens elsewhere
//! - Uses domain types only ([`FieldOfView`], [`ViewOrientation`])

use crate::domain::{FieldOfView, ViewOrientation};

/// Snapshot of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportState {
    pub field_of_view: FieldOfView,
    pub orientation: ViewOrientation,
}

// =============================================================================
// ViewportController Trait
// =============================================================================

/// Port for camera operations on the panorama viewport.
///
/// # Orbit contract
///
/// - Dragging rotates only; the camera never pans away from the sphere center
/// - Rotation is inverted so the panorama follows the cursor
/// - Pitch may reach straight up and straight down
pub trait ViewportController: Send {
    /// Returns the current camera state.
    fn state(&self) -> ViewportState;

    /// Sets the field of view. The value is already clamped by its type.
    fn set_field_of_view(&mut self, field_of_view: FieldOfView);

    /// Applies a pointer drag of `delta_x`/`delta_y` pixels.
    fn orbit(&mut self, delta_x: f32, delta_y: f32);

    /// Informs the controller of the viewport height in pixels, which scales
    /// drag deltas into angles.
    fn set_viewport_height(&mut self, height: f32);

    /// Restores the default field of view and the initial orientation.
    fn reset(&mut self);
}
