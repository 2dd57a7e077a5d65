// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::events::{self, ViewContext as EventsViewContext};
use crate::ui::navbar::{self, Section, ViewContext as NavbarViewContext};
use crate::ui::styles;
use crate::ui::tour::{self, ViewContext as TourViewContext};
use crate::ui::viewer::{component, shell};
use iced::{
    alignment,
    widget::{text, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub viewer: Option<&'a component::State>,
    pub events: &'a events::State,
    pub language_menu_open: bool,
    pub config_warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Viewer => match ctx.viewer {
            Some(viewer) => shell::view(viewer, shell::ViewContext { i18n }).map(Message::Viewer),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        },
        Screen::Tour => tour::view(TourViewContext { i18n }).map(Message::Tour),
        Screen::Events => ctx
            .events
            .view(EventsViewContext { i18n })
            .map(Message::Events),
        Screen::NotFound => view_not_found(i18n),
    };

    // The viewer takes the whole window
    if !ctx.screen.shows_navbar() {
        return current_view;
    }

    let active = if ctx.screen == Screen::Events {
        Section::Events
    } else {
        Section::Tour
    };
    let navbar_view = navbar::view(NavbarViewContext {
        i18n,
        active,
        language_menu_open: ctx.language_menu_open,
    })
    .map(Message::Navbar);

    let mut column = Column::new().push(navbar_view);
    if let Some(key) = ctx.config_warning {
        column = column.push(
            Container::new(
                ErrorDisplay::new(ErrorSeverity::Warning)
                    .message(i18n.tr(key))
                    .action(i18n.tr("notification-dismiss"), Message::DismissWarning)
                    .view(),
            )
            .width(Length::Fill)
            .padding(spacing::SM),
        );
    }

    column
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(footer(i18n))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_not_found(i18n: &I18n) -> Element<'_, Message> {
    centered_error_view(
        ErrorDisplay::new(ErrorSeverity::Error)
            .title(i18n.tr("error-title"))
            .message(i18n.tr("error-unknown-route"))
            .action(i18n.tr("nav-home"), Message::GoHome),
    )
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    let caption = |label: String| {
        Text::new(label)
            .size(typography::CAPTION)
            .shaping(text::Shaping::Advanced)
    };

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::XS, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(caption(i18n.tr("site-description")))
        .push(Space::new().width(Length::Fill))
        .push(caption(i18n.tr("contact-email")))
        .push(caption(i18n.tr("contact-phone")));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}
