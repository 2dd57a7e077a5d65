// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (CQRS read-side)
//!
//! # Architecture
//!
//! The application layer sits between the domain layer (pure business logic)
//! and the infrastructure/presentation layers. It defines:
//!
//! - **Ports (Traits)**: Abstract interfaces that adapters implement
//! - **Queries**: Read-only operations on domain data
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - [`crate::api`] and [`crate::panorama`] implement application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use panotour::application::port::PlaceProvider;
//! use panotour::application::query::RouteHistory;
//!
//! // The HTTP client implements the port trait
//! let provider: Arc<dyn PlaceProvider> = Arc::new(ApiClient::new(base, timeout)?);
//!
//! // Application services use domain types
//! let history = RouteHistory::new(Route::VirtualTour);
//! ```

pub mod port;
pub mod query;
