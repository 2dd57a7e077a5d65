// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording application activity.
//!
//! This module captures diagnostic events during application usage and stores
//! them in a memory-bounded circular buffer. Events are echoed to stderr as
//! structured JSON lines.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A captured event with its monotonic timestamp
//! - [`DiagnosticsCollector`]: Owner of the buffer and the stderr echo

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, LOG_PREFIX};
pub use events::{AppOperation, DiagnosticEvent, DiagnosticEventKind, UserAction};
