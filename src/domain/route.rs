// SPDX-License-Identifier: MPL-2.0
//! Client-side routes.

use super::place::PlaceId;
use std::fmt;

/// A location inside the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/virtual-tour`
    VirtualTour,
    /// `/virtual-tour/{category}/{index}`: a static catalogue entry.
    TourEntry { category: String, index: usize },
    /// `/events`
    Events,
    /// `/lieu/{category}/{place_id}`: a place fetched from the backend.
    Place { category: String, place_id: PlaceId },
}

impl Route {
    /// Parses a path. Query strings, fragments and a trailing slash are
    /// ignored. Unknown paths yield `None`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["virtual-tour"] => Some(Route::VirtualTour),
            ["virtual-tour", category, index] => Some(Route::TourEntry {
                category: (*category).to_string(),
                index: index.parse().ok()?,
            }),
            ["events"] => Some(Route::Events),
            ["lieu", category, place_id] => Some(Route::Place {
                category: (*category).to_string(),
                place_id: PlaceId::new(*place_id),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::VirtualTour => "/virtual-tour".to_string(),
            Route::TourEntry { category, index } => format!("/virtual-tour/{category}/{index}"),
            Route::Events => "/events".to_string(),
            Route::Place { category, place_id } => format!("/lieu/{category}/{place_id}"),
        }
    }

    /// Whether the route shows the panorama viewer.
    #[must_use]
    pub fn is_viewer(&self) -> bool {
        matches!(self, Route::TourEntry { .. } | Route::Place { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
