// SPDX-License-Identifier: MPL-2.0
//! Shared styles for the tour widgets.

pub mod button;
pub mod container;
pub mod overlay;
