// SPDX-License-Identifier: MPL-2.0
//! Route history for back navigation.
//!
//! The app keeps a single [`RouteHistory`] as the source of truth for the
//! current screen. Navigating pushes, going back pops, and the stack never
//! becomes empty.

use crate::domain::Route;

/// Stack of visited routes.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteHistory {
    stack: Vec<Route>,
}

impl RouteHistory {
    /// Creates a history whose root is `root`.
    #[must_use]
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    #[must_use]
    pub fn current(&self) -> &Route {
        // The stack is never empty: `new` seeds it and `back` keeps the root.
        &self.stack[self.stack.len() - 1]
    }

    /// Pushes `route` unless it is already the current one.
    ///
    /// Returns `true` when the current route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        self.stack.push(route);
        true
    }

    /// Returns to the previous route.
    ///
    /// At the root, a viewer route is replaced by the tour listing so Back
    /// and Close always leave the viewer. Returns `true` when the current
    /// route changed.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            return true;
        }
        if self.current().is_viewer() {
            self.stack[0] = Route::VirtualTour;
            return true;
        }
        false
    }

    /// Returns true if a previous route exists on the stack.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for RouteHistory {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
