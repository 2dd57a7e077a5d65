// SPDX-License-Identifier: MPL-2.0
//! Place data port definition.
//!
//! This module defines the [`PlaceProvider`] trait used by the viewer and the
//! events screen. The HTTP adapter lives in [`crate::api`]; tests substitute
//! in-memory providers.

use crate::domain::{EquirectImage, Event, Place, PlaceId};
use crate::error::FetchError;
use futures_util::future::BoxFuture;

/// Future returned by every provider operation.
pub type FetchFuture<T> = BoxFuture<'static, Result<T, FetchError>>;

// =============================================================================
// PlaceProvider Trait
// =============================================================================

/// Port for reading tour data.
///
/// Each call is independent: implementations must not assume the caller
/// awaits the previous future before issuing the next one. The viewer tags
/// every request itself and discards stale answers.
///
/// # Errors
///
/// All operations fail with a [`FetchError`]:
///
/// - [`FetchError::Transport`] when no response arrived
/// - [`FetchError::Status`] for non-success HTTP statuses
/// - [`FetchError::Malformed`] when the body cannot be understood
/// - [`FetchError::NotFound`] when the backend answered without a record
/// - [`FetchError::Image`] when picture bytes cannot be decoded
pub trait PlaceProvider: Send + Sync {
    /// Fetches one place (`GET /lieus/{id}`).
    fn fetch_place(&self, id: &PlaceId) -> FetchFuture<Place>;

    /// Fetches the events listing (`GET /evenements`).
    fn fetch_events(&self) -> FetchFuture<Vec<Event>>;

    /// Downloads and decodes the picture at `url`: a panorama or an
    /// event picture.
    fn fetch_image(&self, url: &str) -> FetchFuture<EquirectImage>;

    /// Base URL used to resolve relative image references.
    fn api_base(&self) -> &str;
}
