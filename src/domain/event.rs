// SPDX-License-Identifier: MPL-2.0
//! Events and conferences announced by the mosque.

use super::place::resolve_image_url;

/// Lifecycle of an event as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Past,
    /// Any status string the client does not know about.
    Other(String),
}

impl EventStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "upcoming" => EventStatus::Upcoming,
            "past" => EventStatus::Past,
            other => EventStatus::Other(other.to_string()),
        }
    }
}

/// One entry of the events listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date as sent by the backend (`YYYY-MM-DD`).
    pub date: String,
    pub time: String,
    pub location: String,
    /// Relative storage path or absolute URL of the event picture.
    pub image: Option<String>,
    pub kind: String,
    pub status: EventStatus,
}

impl Event {
    /// Picture URL, resolved like a panorama reference.
    #[must_use]
    pub fn image_url(&self, api_base: &str) -> Option<String> {
        self.image
            .as_deref()
            .map(|image| resolve_image_url(api_base, image))
    }
}

/// Status filter of the events screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl EventFilter {
    pub const ALL: [EventFilter; 3] = [EventFilter::All, EventFilter::Upcoming, EventFilter::Past];

    #[must_use]
    pub fn matches(self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Upcoming => event.status == EventStatus::Upcoming,
            EventFilter::Past => event.status == EventStatus::Past,
        }
    }

    /// Keeps the events accepted by this filter, preserving order.
    pub fn apply<'a>(self, events: &'a [Event]) -> impl Iterator<Item = &'a Event> + 'a {
        events.iter().filter(move |event| self.matches(event))
    }

    /// i18n key of the filter button label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            EventFilter::All => "events-filter-all",
            EventFilter::Upcoming => "events-filter-upcoming",
            EventFilter::Past => "events-filter-past",
        }
    }
}
