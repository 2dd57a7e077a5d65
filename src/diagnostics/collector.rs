// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics log.
//!
//! The application owns one [`DiagnosticsCollector`] and logs to it from the
//! update loop. Every event is also written to stderr as one JSON line.

use super::buffer::CircularBuffer;
use super::events::{AppOperation, DiagnosticEvent, DiagnosticEventKind, UserAction};
use crate::config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY;

/// Prefix of every stderr line.
pub const LOG_PREFIX: &str = "[panotour]";

pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    echo: bool,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            echo: true,
        }
    }

    /// A collector that only buffers, for tests.
    #[must_use]
    pub fn silent(capacity: usize) -> Self {
        Self {
            echo: false,
            ..Self::new(capacity)
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.log(DiagnosticEventKind::UserAction {
            action,
            details: None,
        });
    }

    pub fn log_operation(&mut self, operation: AppOperation) {
        self.log(DiagnosticEventKind::Operation { operation });
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    fn log(&mut self, kind: DiagnosticEventKind) {
        if self.echo {
            match serde_json::to_string(&kind) {
                Ok(line) => eprintln!("{LOG_PREFIX} {line}"),
                Err(err) => eprintln!("{LOG_PREFIX} unserializable event: {err}"),
            }
        }
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Kind of the most recent event.
    #[must_use]
    pub fn last_kind(&self) -> Option<&DiagnosticEventKind> {
        self.buffer.last().map(|event| &event.kind)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}
