// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised surface used for the error panel and event cards.
///
/// The color is derived from the active theme background so it stays
/// readable in both modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color { a: opacity::SURFACE, ..base })),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let text = if theme.extended_palette().is_dark {
        palette::WHITE
    } else {
        palette::EMERALD_900
    };

    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.weak.color)),
        text_color: Some(text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Full-bleed black backdrop behind the panorama.
pub fn scene(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
