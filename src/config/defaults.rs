// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Field of view**: Panorama zoom bounds and step
//! - **Camera**: Initial sphere orientation and orbit sensitivity
//! - **API**: Backend location and request timeout
//! - **Rendering**: Panorama download and texture sizing
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Field of View Defaults
// ==========================================================================

/// Field of view restored by the reset action (degrees).
pub const DEFAULT_FOV_DEGREES: f32 = 95.0;

/// Narrowest allowed field of view (most zoomed in).
pub const MIN_FOV_DEGREES: f32 = 30.0;

/// Widest allowed field of view (most zoomed out).
pub const MAX_FOV_DEGREES: f32 = 100.0;

/// Field of view change per zoom button press or wheel notch.
pub const FOV_STEP_DEGREES: f32 = 10.0;

// ==========================================================================
// Camera Defaults
// ==========================================================================

/// Initial yaw rotation applied to the panorama sphere (2π/3 radians).
pub const DEFAULT_INITIAL_YAW: f32 = std::f32::consts::PI / 1.5;

/// Orbit rotation speed. Negative values invert the drag direction so the
/// panorama follows the cursor.
pub const ORBIT_ROTATE_SPEED: f32 = -0.5;

// ==========================================================================
// API Defaults
// ==========================================================================

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shortest accepted request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Longest accepted request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Rendering Defaults
// ==========================================================================

/// Largest panorama download accepted, in bytes (64 MiB).
pub const MAX_PANORAMA_BYTES: u64 = 64 * 1024 * 1024;

/// Decoded panoramas wider than this are downscaled before rendering.
pub const MAX_TEXTURE_WIDTH: u32 = 4096;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FOV_DEGREES < MAX_FOV_DEGREES);
    assert!(DEFAULT_FOV_DEGREES >= MIN_FOV_DEGREES);
    assert!(DEFAULT_FOV_DEGREES <= MAX_FOV_DEGREES);
    assert!(FOV_STEP_DEGREES > 0.0);
    assert!(MIN_REQUEST_TIMEOUT_SECS <= DEFAULT_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY > 0);
};
