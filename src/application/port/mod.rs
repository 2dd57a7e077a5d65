// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`place`]: Place and event retrieval from the backend
//! - [`viewport`]: Camera control of the panorama viewport
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Provider traits are `Send + Sync` so one instance can be shared by tasks
//! - No `async fn`: providers hand back boxed `'static` futures that callers
//!   wrap in Iced's `Task::perform`
//!
//! # Example
//!
//! ```ignore
//! use panotour::application::port::ViewportController;
//! use panotour::domain::FieldOfView;
//!
//! fn zoom_in(viewport: &mut impl ViewportController) {
//!     let fov = viewport.state().field_of_view.zoom_in();
//!     viewport.set_field_of_view(fov);
//! }
//! ```

pub mod place;
pub mod viewport;

// Re-export main types for convenience
pub use place::{FetchFuture, PlaceProvider};
pub use viewport::{ViewportController, ViewportState};
