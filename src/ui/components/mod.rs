// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - error and warning panels with localized text,
//!   expandable technical details and an action button

pub mod error_display;
