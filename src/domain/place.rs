// SPDX-License-Identifier: MPL-2.0
//! Places (lieux): named points of interest with a panoramic image.

use super::text::Text;
use std::fmt;

/// Path segment under the API base where panorama images are served.
pub const IMAGE_STORAGE_PATH: &str = "storage/images";

/// Opaque place identifier. The backend may send numbers or strings; both
/// are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for PlaceId {
    fn from(value: u64) -> Self {
        Self::new(value.to_string())
    }
}

/// A place record, immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: PlaceId,
    pub name: Text,
    /// Relative storage path or absolute URL of the equirectangular image.
    pub image: String,
    pub description: Option<Text>,
}

impl Place {
    /// Resolves the panorama URL: absolute `http(s)` references are used
    /// as-is, anything else is served from `{api_base}/storage/images/`.
    #[must_use]
    pub fn image_url(&self, api_base: &str) -> String {
        resolve_image_url(api_base, &self.image)
    }
}

/// See [`Place::image_url`].
#[must_use]
pub fn resolve_image_url(api_base: &str, image: &str) -> String {
    if is_absolute_url(image) {
        return image.to_string();
    }
    format!(
        "{}/{}/{}",
        api_base.trim_end_matches('/'),
        IMAGE_STORAGE_PATH,
        image.trim_start_matches('/')
    )
}

fn is_absolute_url(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
