// SPDX-License-Identifier: MPL-2.0
//! Query services (CQRS read-side).
//!
//! This module contains query services for reading and navigating domain data.
//!
//! # Available Services
//!
//! - [`navigation`]: Route history navigation (`RouteHistory`)
//! - [`request`]: Generation tags for asynchronous fetches (`RequestTracker`)
//!
//! # Design Notes
//!
//! Query services are part of the application layer because they:
//! - Coordinate domain operations
//! - Implement application-specific use cases
//!
//! They are not domain entities because they manage session state (the
//! stack of visited routes, the current request generation).

pub mod navigation;
pub mod request;

// Re-export main types
pub use navigation::RouteHistory;
pub use request::RequestTracker;
