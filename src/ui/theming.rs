// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes, and the matching iced themes.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,

    pub error: Color,

    // Overlay colors (viewer header and controls)
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::EMERALD_600,
            brand_secondary: palette::EMERALD_700,
            accent: palette::SAND_500,

            error: palette::ERROR_500,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.11, 0.14, 0.2),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::EMERALD_500,
            brand_secondary: palette::EMERALD_400,
            accent: palette::SAND_300,

            error: palette::ERROR_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }
}

/// Resolved theme: the configured mode and its colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light only when the platform says so
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl AppTheme {
    /// Resolves `mode`, querying the platform once for [`ThemeMode::System`].
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };
        Self { colors, mode, dark }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Builds the iced theme with the brand color as primary.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        let (base, name) = if self.dark {
            (Theme::Dark, "Panotour Dark")
        } else {
            (Theme::Light, "Panotour Light")
        };
        let mut iced_palette = base.palette();
        iced_palette.primary = self.colors.brand_primary;
        iced_palette.background = self.colors.surface_primary;
        iced_palette.text = self.colors.text_primary;
        iced_palette.danger = self.colors.error;
        Theme::custom(name.to_string(), iced_palette)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn brand_is_green_in_both_modes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.brand_primary.g > scheme.brand_primary.r);
            assert!(scheme.brand_primary.g > scheme.brand_primary.b);
        }
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert!(!AppTheme::new(ThemeMode::Light).is_dark());
        assert!(AppTheme::new(ThemeMode::Dark).is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn iced_theme_uses_brand_primary() {
        let theme = AppTheme::new(ThemeMode::Light);
        assert_eq!(theme.iced_theme().palette().primary, palette::EMERALD_600);
    }
}
