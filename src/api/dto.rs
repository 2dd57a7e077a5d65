// SPDX-License-Identifier: MPL-2.0
//! Wire formats of the backend API.
//!
//! Responses are wrapped in a `{ "data": ... }` envelope. Identifiers may be
//! JSON numbers or strings, and names may be plain strings or per-language
//! objects.

use crate::domain::{Event, EventStatus, LocalizedText, Place, PlaceId, Text};
use crate::error::FetchError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(u64),
    Text(String),
}

impl From<WireId> for PlaceId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => PlaceId::from(n),
            WireId::Text(s) => PlaceId::new(s),
        }
    }
}

impl WireId {
    fn into_string(self) -> String {
        match self {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireLocalizedText {
    #[serde(default)]
    pub fr: Option<String>,
    #[serde(default)]
    pub ar: Option<String>,
    #[serde(default)]
    pub wo: Option<String>,
    #[serde(default)]
    pub en: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireText {
    Plain(String),
    Localized(WireLocalizedText),
}

impl From<WireText> for Text {
    fn from(text: WireText) -> Self {
        match text {
            WireText::Plain(s) => Text::Plain(s),
            WireText::Localized(l) => Text::Localized(LocalizedText {
                fr: l.fr,
                ar: l.ar,
                wo: l.wo,
                en: l.en,
            }),
        }
    }
}

/// `GET /lieus/{id}` record.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDto {
    pub id: WireId,
    pub name: WireText,
    pub image: String,
    #[serde(default)]
    pub description: Option<WireText>,
}

impl TryFrom<PlaceDto> for Place {
    type Error = FetchError;

    fn try_from(dto: PlaceDto) -> Result<Self, Self::Error> {
        let image = dto.image.trim();
        if image.is_empty() {
            return Err(FetchError::Malformed("place has no image".to_string()));
        }
        Ok(Place {
            id: dto.id.into(),
            name: dto.name.into(),
            image: image.to_string(),
            description: dto.description.map(Text::from),
        })
    }
}

/// `GET /evenements` item.
#[derive(Debug, Clone, Deserialize)]
pub struct EventDto {
    pub id: WireId,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub status: String,
}

impl From<EventDto> for Event {
    fn from(dto: EventDto) -> Self {
        Event {
            id: dto.id.into_string(),
            title: dto.title,
            date: dto.date,
            time: dto.time,
            location: dto.location,
            image: dto.image.filter(|s| !s.trim().is_empty()),
            kind: dto.kind,
            status: EventStatus::parse(&dto.status),
        }
    }
}

/// Parses a place response body. A `null` or absent `data` means the place
/// does not exist.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] for invalid JSON or missing fields and
/// [`FetchError::NotFound`] for an empty envelope.
pub fn parse_place(body: &[u8]) -> Result<Place, FetchError> {
    let envelope: Envelope<PlaceDto> =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    envelope.data.ok_or(FetchError::NotFound)?.try_into()
}

/// Parses an events response body. An empty envelope is an empty listing.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] for invalid JSON or missing fields.
pub fn parse_events(body: &[u8]) -> Result<Vec<Event>, FetchError> {
    let envelope: Envelope<Vec<EventDto>> =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .map(Event::from)
        .collect())
}
