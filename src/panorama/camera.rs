// SPDX-License-Identifier: MPL-2.0
//! Orbit camera placed at the center of the panorama sphere.

use crate::application::port::{ViewportController, ViewportState};
use crate::config::ORBIT_ROTATE_SPEED;
use crate::domain::{FieldOfView, ViewOrientation};
use std::f32::consts::TAU;

/// Camera that only rotates. Dragging across the full viewport height turns
/// the view by `TAU * |rotate_speed|` radians.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    field_of_view: FieldOfView,
    orientation: ViewOrientation,
    viewport_height: f32,
    rotate_speed: f32,
}

impl OrbitCamera {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rotate_speed(ORBIT_ROTATE_SPEED)
    }

    #[must_use]
    pub fn with_rotate_speed(rotate_speed: f32) -> Self {
        Self {
            field_of_view: FieldOfView::default(),
            orientation: ViewOrientation::default(),
            viewport_height: 0.0,
            rotate_speed,
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController for OrbitCamera {
    fn state(&self) -> ViewportState {
        ViewportState {
            field_of_view: self.field_of_view,
            orientation: self.orientation,
        }
    }

    fn set_field_of_view(&mut self, field_of_view: FieldOfView) {
        self.field_of_view = field_of_view;
    }

    fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        if self.viewport_height <= 0.0 {
            return;
        }
        let radians_per_pixel = TAU / self.viewport_height * self.rotate_speed;
        // Screen y grows downward while pitch grows upward.
        self.orientation = self
            .orientation
            .rotated(radians_per_pixel * delta_x, -radians_per_pixel * delta_y);
    }

    fn set_viewport_height(&mut self, height: f32) {
        if height.is_finite() && height > 0.0 {
            self.viewport_height = height;
        }
    }

    fn reset(&mut self) {
        self.field_of_view = FieldOfView::default();
        self.orientation = ViewOrientation::default();
    }
}
