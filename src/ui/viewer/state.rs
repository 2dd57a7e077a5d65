// SPDX-License-Identifier: MPL-2.0
//! Viewer phase model.
//!
//! `Loading`, `Ready` and `Failed` are mutually exclusive. Inside `Ready`
//! the panorama texture has its own sub-state, and the sphere is drawn only
//! once it is `Loaded`.

use crate::domain::{EquirectImage, Language, Place};
use crate::error::FetchError;

#[derive(Debug, Clone, Default)]
pub enum TextureState {
    #[default]
    Pending,
    Loaded(EquirectImage),
    Failed(FetchError),
}

/// A place being displayed together with its panorama.
#[derive(Debug, Clone)]
pub struct LoadedPlace {
    pub place: Place,
    /// Resolved panorama URL.
    pub image_url: String,
    pub texture: TextureState,
}

impl LoadedPlace {
    #[must_use]
    pub fn new(place: Place, api_base: &str) -> Self {
        let image_url = place.image_url(api_base);
        Self {
            place,
            image_url,
            texture: TextureState::Pending,
        }
    }

    #[must_use]
    pub fn title(&self, language: Language) -> &str {
        self.place.name.get(language)
    }

    #[must_use]
    pub fn texture_image(&self) -> Option<&EquirectImage> {
        match &self.texture {
            TextureState::Loaded(image) => Some(image),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready(Box<LoadedPlace>),
    Failed(FetchError),
}

impl Phase {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    #[must_use]
    pub fn loaded_place(&self) -> Option<&LoadedPlace> {
        match self {
            Phase::Ready(loaded) => Some(loaded),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Whether a spinner should be animating: the place or its texture is
    /// still on its way.
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        match self {
            Phase::Loading => true,
            Phase::Ready(loaded) => matches!(loaded.texture, TextureState::Pending),
            Phase::Failed(_) => false,
        }
    }

    /// Whether the sphere can be drawn.
    #[must_use]
    pub fn has_texture(&self) -> bool {
        self.loaded_place()
            .is_some_and(|loaded| loaded.texture_image().is_some())
    }
}
