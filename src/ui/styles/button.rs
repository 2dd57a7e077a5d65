// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (error panel back button).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, drop) = match status {
        button::Status::Hovered => (palette::EMERALD_500, palette::EMERALD_600, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_500, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::EMERALD_600, palette::EMERALD_700, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: drop,
        snap: true,
    }
}

/// Round translucent button drawn over the panorama.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Active entry of a toggle group (filters, language switcher, nav).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::EMERALD_500,
        _ => palette::EMERALD_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::EMERALD_700,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Inactive entry of a toggle group. Adapts to light and dark themes.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    let (background, text_color) = match (is_dark, status) {
        (false, button::Status::Hovered) => (palette::EMERALD_100, palette::EMERALD_900),
        (false, _) => (palette::GRAY_100, palette::GRAY_900),
        (true, button::Status::Hovered) => (palette::EMERALD_900, WHITE),
        (true, _) => (palette::GRAY_700, WHITE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::GRAY_500,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable place card on the tour listing.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let (border_color, drop) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::EMERALD_500, shadow::MD),
        _ => (Color::TRANSPARENT, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: extended.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::LG.into(),
        },
        shadow: drop,
        snap: true,
    }
}
