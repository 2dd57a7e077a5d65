// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen exposes a `Message`, an update function returning an `Effect` or
//! `Event` for the application, and a view taking a `ViewContext` that
//! carries `&I18n`.
//!
//! # Screens
//!
//! - [`tour`] - Category listing with place cards
//! - [`events`] - Events listing with status filters
//! - [`viewer`] - Panorama viewer and its navigation shell
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Site title, listing links and language switcher
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod events;
pub mod navbar;
pub mod styles;
pub mod theming;
pub mod tour;
pub mod viewer;
pub mod widgets;
