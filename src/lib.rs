// SPDX-License-Identifier: MPL-2.0
//! `panotour` is a desktop virtual tour of the Great Mosque of Tivaouane,
//! built with the Iced GUI framework.
//!
//! It lists the mosque's places and events, and shows each place as a
//! 360° panorama the visitor can orbit and zoom, in French, Arabic, Wolof
//! or English.

pub mod api;
pub mod app;
pub mod application;
pub mod catalogue;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod panorama;
pub mod ui;
