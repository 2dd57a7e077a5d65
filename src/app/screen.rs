// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::domain::Route;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Tour,
    Events,
    Viewer,
    /// A path that matches no route, or a catalogue entry that does not exist.
    NotFound,
}

impl Screen {
    /// Screen rendering `route`. The home page shows the tour listing.
    #[must_use]
    pub fn for_route(route: &Route) -> Self {
        match route {
            Route::Home | Route::VirtualTour => Screen::Tour,
            Route::Events => Screen::Events,
            Route::TourEntry { .. } | Route::Place { .. } => Screen::Viewer,
        }
    }

    /// Whether the navbar is drawn above the screen.
    #[must_use]
    pub fn shows_navbar(self) -> bool {
        !matches!(self, Screen::Viewer)
    }
}
