// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability. Wire formats live in [`crate::api`] and convert into these
//! types.
//!
//! # Modules
//!
//! - [`language`]: Supported site languages ([`Language`](language::Language))
//! - [`text`]: Plain or per-language strings ([`Text`](text::Text))
//! - [`place`]: Points of interest with a panorama ([`Place`](place::Place))
//! - [`event`]: Events and conferences ([`Event`](event::Event))
//! - [`panorama`]: Decoded equirectangular pixels
//! - [`route`]: Client-side routes ([`Route`](route::Route))
//! - [`viewer`]: Panorama viewer value objects
//!   ([`FieldOfView`](viewer::FieldOfView))

pub mod event;
pub mod language;
pub mod panorama;
pub mod place;
pub mod route;
pub mod text;
pub mod viewer;

pub use event::{Event, EventFilter, EventStatus};
pub use language::Language;
pub use panorama::EquirectImage;
pub use place::{Place, PlaceId};
pub use route::Route;
pub use text::{LocalizedText, Text};
pub use viewer::{FieldOfView, ViewOrientation};
