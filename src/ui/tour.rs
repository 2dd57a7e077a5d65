// SPDX-License-Identifier: MPL-2.0
//! Virtual tour listing: catalogue categories and their place cards.

use crate::catalogue::{self, CataloguePlace, Category};
use crate::domain::{Language, PlaceId, Route};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenPlace {
        category: &'static str,
        place_id: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(Route),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenPlace { category, place_id } => Event::Navigate(Route::Place {
            category: category.to_string(),
            place_id: PlaceId::new(place_id),
        }),
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let language = i18n.current_language();
    let horizontal = if language.is_rtl() {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };

    let header = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(horizontal)
        .push(
            Text::new(i18n.tr("tour-title"))
                .size(typography::TITLE_LG)
                .shaping(text::Shaping::Advanced),
        )
        .push(
            Text::new(i18n.tr("tour-subtitle"))
                .size(typography::BODY_LG)
                .shaping(text::Shaping::Advanced),
        );

    let content = catalogue::categories().iter().fold(
        Column::new()
            .spacing(spacing::XL)
            .padding(spacing::LG)
            .push(header),
        |column, category| column.push(category_section(i18n, language, horizontal, category)),
    );

    scrollable(content).height(Length::Fill).into()
}

fn category_section<'a>(
    i18n: &'a I18n,
    language: Language,
    horizontal: alignment::Horizontal,
    category: &'static Category,
) -> Element<'a, Message> {
    let count = category.places.len().to_string();
    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(category.name.get(language))
                .size(typography::TITLE_MD)
                .shaping(text::Shaping::Advanced),
        )
        .push(
            Text::new(i18n.tr_with_args("tour-place-count", &[("count", count.as_str())]))
                .size(typography::CAPTION)
                .shaping(text::Shaping::Advanced),
        );

    let cards = category
        .places
        .iter()
        .fold(Row::new().spacing(spacing::MD), |row, place| {
            row.push(place_card(language, category.key, place))
        })
        .wrap()
        .vertical_spacing(spacing::MD);

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .align_x(horizontal)
        .push(heading)
        .push(cards)
        .into()
}

fn place_card<'a>(
    language: Language,
    category: &'static str,
    place: &'static CataloguePlace,
) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(place.name.get(language))
                .size(typography::TITLE_SM)
                .shaping(text::Shaping::Advanced),
        )
        .push(
            Text::new(place.description.get(language))
                .size(typography::BODY_SM)
                .shaping(text::Shaping::Advanced),
        );

    button(Container::new(body).padding(spacing::MD))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .on_press(Message::OpenPlace {
            category,
            place_id: place.id,
        })
        .style(styles::button::card)
        .into()
}
