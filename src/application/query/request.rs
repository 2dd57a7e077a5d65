// SPDX-License-Identifier: MPL-2.0
//! Generation tags for asynchronous fetches.
//!
//! Each new request bumps the generation; a response carries the generation
//! it was issued with and is dropped when a newer request has started since.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: u64,
    started_at: Option<Instant>,
}

impl RequestTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request and returns its generation.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.started_at = Some(Instant::now());
        self.generation
    }

    /// Invalidates the outstanding request without starting another.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.started_at = None;
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.started_at.is_some() && generation == self.generation
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.started_at.is_some()
    }

    /// Completes the request if `generation` is current, returning how long
    /// it took. Stale generations return `None` and leave state untouched.
    pub fn finish(&mut self, generation: u64) -> Option<Duration> {
        if !self.is_current(generation) {
            return None;
        }
        self.started_at.take().map(|start| start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_bumps_generation() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();
        assert_ne!(first, second);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn finish_accepts_current_only_once() {
        let mut tracker = RequestTracker::new();
        let generation = tracker.begin();
        assert!(tracker.finish(generation).is_some());
        assert!(tracker.finish(generation).is_none());
        assert!(!tracker.is_pending());
    }

    #[test]
    fn stale_finish_keeps_pending_request() {
        let mut tracker = RequestTracker::new();
        let old = tracker.begin();
        let new = tracker.begin();
        assert!(tracker.finish(old).is_none());
        assert!(tracker.is_pending());
        assert!(tracker.finish(new).is_some());
    }

    #[test]
    fn cancel_invalidates_outstanding_request() {
        let mut tracker = RequestTracker::new();
        let generation = tracker.begin();
        tracker.cancel();
        assert!(!tracker.is_current(generation));
        assert!(!tracker.is_pending());
    }
}
