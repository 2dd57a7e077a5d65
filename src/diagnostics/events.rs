// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! This module defines the events captured while the tour is used: what the
//! visitor did and how the backend requests went.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User-initiated actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation Actions
    // ==========================================================================
    /// Open a route.
    Navigate { route: String },

    /// Go back in the route history.
    NavigateBack,

    /// Pick another interface language.
    ChangeLanguage { language: String },

    /// Change the events status filter.
    FilterEvents { filter: String },

    // ==========================================================================
    // Viewer Actions
    // ==========================================================================
    ZoomIn,

    ZoomOut,

    /// Restore field of view and orientation.
    ResetView,

    ToggleFullscreen,

    ExitFullscreen,
}

/// Background work and its outcome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum AppOperation {
    /// A request was issued. `resource` is the URL or a short label.
    FetchStarted { resource: String, generation: u64 },

    FetchSucceeded {
        resource: String,
        generation: u64,
        duration_ms: u64,
    },

    FetchFailed {
        resource: String,
        generation: u64,
        error: String,
    },

    /// A response arrived for a request that is no longer current.
    StaleResponseDiscarded { resource: String, generation: u64 },

    TextureLoaded {
        width: u32,
        height: u32,
        duration_ms: u64,
    },
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic time of capture.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    Operation { operation: AppOperation },

    Warning { message: String },

    Error { message: String },
}
