// SPDX-License-Identifier: MPL-2.0
//! Panorama viewer value objects.
//!
//! These types ensure viewer values are always within valid ranges.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

// =============================================================================
// Field of View Bounds
// =============================================================================

/// Field of view bounds in degrees (30° to 100°).
pub mod fov_bounds {
    /// Narrowest field of view (most zoomed in).
    pub const MIN: f32 = 30.0;
    /// Widest field of view (most zoomed out).
    pub const MAX: f32 = 100.0;
    /// Field of view after a reset.
    pub const DEFAULT: f32 = 95.0;
    /// Change per zoom step.
    pub const STEP: f32 = 10.0;
}

// =============================================================================
// FieldOfView
// =============================================================================

/// Vertical camera field of view, guaranteed to be within 30°–100°.
///
/// Zooming in narrows the field of view; zooming out widens it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView(f32);

impl FieldOfView {
    /// Creates a new field of view, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(degrees: f32) -> Self {
        if !degrees.is_finite() {
            return Self::default();
        }
        Self(degrees.clamp(fov_bounds::MIN, fov_bounds::MAX))
    }

    /// Returns the raw value in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Returns the value in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= fov_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= fov_bounds::MAX
    }

    /// Narrows the field of view by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 - fov_bounds::STEP)
    }

    /// Widens the field of view by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 + fov_bounds::STEP)
    }

    /// Applies `steps` zoom steps; positive values zoom in.
    #[must_use]
    pub fn zoom_by_steps(self, steps: f32) -> Self {
        Self::new(self.0 - steps * fov_bounds::STEP)
    }
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self(fov_bounds::DEFAULT)
    }
}

// =============================================================================
// ViewOrientation
// =============================================================================

/// Camera look direction in radians.
///
/// `yaw` turns right when positive and is kept in `(-π, π]`; `pitch` looks
/// up when positive and is kept in `[-π/2, π/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewOrientation {
    yaw: f32,
    pitch: f32,
}

impl ViewOrientation {
    #[must_use]
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: normalize_angle(yaw),
            pitch: if pitch.is_finite() {
                pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
            } else {
                0.0
            },
        }
    }

    #[must_use]
    pub fn yaw(self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub fn pitch(self) -> f32 {
        self.pitch
    }

    /// Adds the given angles, wrapping yaw and clamping pitch.
    #[must_use]
    pub fn rotated(self, delta_yaw: f32, delta_pitch: f32) -> Self {
        Self::new(self.yaw + delta_yaw, self.pitch + delta_pitch)
    }
}

fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DEFAULT_FOV_DEGREES, FOV_STEP_DEGREES, MAX_FOV_DEGREES, MIN_FOV_DEGREES,
    };

    // Verify domain bounds match config constants
    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(fov_bounds::MIN, MIN_FOV_DEGREES);
        assert_eq!(fov_bounds::MAX, MAX_FOV_DEGREES);
        assert_eq!(fov_bounds::DEFAULT, DEFAULT_FOV_DEGREES);
        assert_eq!(fov_bounds::STEP, FOV_STEP_DEGREES);
    }

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(FieldOfView::new(5.0).degrees(), fov_bounds::MIN);
        assert_eq!(FieldOfView::new(170.0).degrees(), fov_bounds::MAX);
        assert_eq!(FieldOfView::new(60.0).degrees(), 60.0);
    }

    #[test]
    fn non_finite_input_uses_default() {
        assert_eq!(FieldOfView::new(f32::NAN), FieldOfView::default());
        assert_eq!(FieldOfView::new(f32::INFINITY), FieldOfView::default());
    }

    #[test]
    fn repeated_zoom_in_stops_at_minimum() {
        let mut fov = FieldOfView::default();
        for _ in 0..50 {
            fov = fov.zoom_in();
            assert!(fov.degrees() >= fov_bounds::MIN);
        }
        assert!(fov.is_min());
    }

    #[test]
    fn repeated_zoom_out_stops_at_maximum() {
        let mut fov = FieldOfView::new(40.0);
        for _ in 0..50 {
            fov = fov.zoom_out();
            assert!(fov.degrees() <= fov_bounds::MAX);
        }
        assert!(fov.is_max());
    }

    #[test]
    fn alternating_zoom_stays_in_range() {
        let mut fov = FieldOfView::default();
        for i in 0..200 {
            fov = if i % 3 == 0 { fov.zoom_out() } else { fov.zoom_in() };
            assert!((fov_bounds::MIN..=fov_bounds::MAX).contains(&fov.degrees()));
        }
    }

    #[test]
    fn orientation_wraps_yaw_and_clamps_pitch() {
        let o = ViewOrientation::new(3.0 * PI / 2.0, 2.0);
        assert!((o.yaw() - (-PI / 2.0)).abs() < 1e-5);
        assert_eq!(o.pitch(), FRAC_PI_2);

        let down = o.rotated(0.0, -10.0);
        assert_eq!(down.pitch(), -FRAC_PI_2);
    }

    #[test]
    fn orientation_rejects_non_finite() {
        let o = ViewOrientation::new(f32::NAN, f32::INFINITY);
        assert_eq!(o, ViewOrientation::default());
    }

    #[test]
    fn zoom_by_steps_follows_sign() {
        let fov = FieldOfView::new(60.0);
        assert_eq!(fov.zoom_by_steps(1.0).degrees(), 50.0);
        assert_eq!(fov.zoom_by_steps(-2.0).degrees(), 80.0);
    }
}
