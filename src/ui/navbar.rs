// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above the listing screens.
//!
//! Holds the site title, links to the tour and events listings, and the
//! language switcher. The viewer screen hides it.

use crate::domain::{Language, Route};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Which listing link is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Tour,
    Events,
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub language_menu_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenHome,
    OpenTour,
    OpenEvents,
    ToggleLanguageMenu,
    SelectLanguage(Language),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(Route),
    LanguageSelected(Language),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, language_menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleLanguageMenu => {
            *language_menu_open = !*language_menu_open;
            Event::None
        }
        Message::SelectLanguage(language) => {
            *language_menu_open = false;
            Event::LanguageSelected(language)
        }
        Message::OpenHome => {
            *language_menu_open = false;
            Event::Navigate(Route::Home)
        }
        Message::OpenTour => {
            *language_menu_open = false;
            Event::Navigate(Route::VirtualTour)
        }
        Message::OpenEvents => {
            *language_menu_open = false;
            Event::Navigate(Route::Events)
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.language_menu_open {
        content = content.push(build_language_menu(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let site_title = button(
        Text::new(i18n.tr("site-title"))
            .size(typography::TITLE_MD)
            .shaping(text::Shaping::Advanced),
    )
    .on_press(Message::OpenHome)
    .style(button::text);

    let link = |label: String, section: Section, message: Message| {
        let style = if ctx.active == section {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        button(Text::new(label).shaping(text::Shaping::Advanced))
            .padding([spacing::XXS, spacing::MD])
            .on_press(message)
            .style(style)
    };

    let language_button = button(
        Text::new(format!(
            "{} · {}",
            i18n.tr("nav-language"),
            i18n.current_language().native_name()
        ))
        .shaping(text::Shaping::Advanced),
    )
    .padding([spacing::XXS, spacing::MD])
    .on_press(Message::ToggleLanguageMenu)
    .style(if ctx.language_menu_open {
        styles::button::selected
    } else {
        styles::button::unselected
    });

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(site_title)
        .push(Space::new().width(Length::Fill))
        .push(link(i18n.tr("nav-virtual-tour"), Section::Tour, Message::OpenTour))
        .push(link(i18n.tr("nav-events"), Section::Events, Message::OpenEvents))
        .push(language_button)
        .into()
}

fn build_language_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_language();

    let buttons = ctx
        .i18n
        .available_languages()
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, language| {
            let style = if language == current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(language.native_name()).shaping(text::Shaping::Advanced))
                    .padding([spacing::XXS, spacing::MD])
                    .on_press(Message::SelectLanguage(language))
                    .style(style),
            )
        });

    Row::new()
        .padding([spacing::XS, spacing::SM])
        .push(Space::new().width(Length::Fill))
        .push(buttons)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_language_menu_flips_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleLanguageMenu, &mut open), Event::None);
        assert!(open);
        assert_eq!(update(Message::ToggleLanguageMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn selecting_language_closes_menu() {
        let mut open = true;
        let event = update(Message::SelectLanguage(Language::Arabic), &mut open);
        assert_eq!(event, Event::LanguageSelected(Language::Arabic));
        assert!(!open);
    }

    #[test]
    fn links_navigate_to_routes() {
        let mut open = true;
        assert_eq!(
            update(Message::OpenEvents, &mut open),
            Event::Navigate(Route::Events)
        );
        assert!(!open);
        assert_eq!(
            update(Message::OpenTour, &mut open),
            Event::Navigate(Route::VirtualTour)
        );
        assert_eq!(update(Message::OpenHome, &mut open), Event::Navigate(Route::Home));
    }
}
