// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the tour backend.
//!
//! [`ApiClient`] implements the [`PlaceProvider`] port on top of `reqwest`.
//! JSON payloads are parsed by the wire types in [`dto`] and converted into
//! domain types before leaving this module.
//!
//! [`PlaceProvider`]: crate::application::port::PlaceProvider

mod client;
pub mod dto;

pub use client::ApiClient;
