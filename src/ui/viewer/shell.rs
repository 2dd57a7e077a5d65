// SPDX-License-Identifier: MPL-2.0
//! Navigation shell around the panorama.
//!
//! Exactly one of three things is shown: a loading spinner, an error panel
//! with a back action, or the live panorama with its header overlay and
//! control cluster.

use super::component::{Message, State};
use super::state::{LoadedPlace, Phase, TextureState};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let content = match state.phase() {
        Phase::Loading => loading_view(i18n.tr("viewer-loading"), state.spinner_rotation()),
        Phase::Failed(error) => centered_error_view(
            ErrorDisplay::from_fetch_error(error, i18n)
                .action(i18n.tr("viewer-back"), Message::Back)
                .on_toggle_details(Message::ToggleErrorDetails)
                .details_visible(state.show_error_details()),
        ),
        Phase::Ready(loaded) => ready_view(state, loaded, i18n),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scene)
        .into()
}

fn loading_view<'a>(label: String, rotation: f32) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(AnimatedSpinner::new(palette::EMERALD_400, rotation).into_element())
            .push(
                Text::new(label)
                    .size(typography::BODY_LG)
                    .color(palette::WHITE)
                    .shaping(text::Shaping::Advanced),
            ),
    )
    .center(Length::Fill)
    .into()
}

fn ready_view<'a>(state: &'a State, loaded: &'a LoadedPlace, i18n: &'a I18n) -> Element<'a, Message> {
    let scene: Element<'a, Message> = match &loaded.texture {
        TextureState::Loaded(_) => match state.scene() {
            Some(scene) => scene.view(),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        },
        TextureState::Failed(error) => centered_error_view(
            ErrorDisplay::from_fetch_error(error, i18n)
                .on_toggle_details(Message::ToggleErrorDetails)
                .details_visible(state.show_error_details()),
        ),
        TextureState::Pending => {
            loading_view(i18n.tr("viewer-loading-panorama"), state.spinner_rotation())
        }
    };

    let mut overlay = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(loaded, i18n))
        .push(Space::new().height(Length::Fill));

    if state.phase().has_texture() {
        if !state.has_dragged() {
            overlay = overlay.push(
                Container::new(
                    Container::new(
                        Text::new(i18n.tr("viewer-drag-hint"))
                            .size(typography::BODY_SM)
                            .shaping(text::Shaping::Advanced),
                    )
                    .padding([spacing::XXS, spacing::MD])
                    .style(styles::overlay::indicator(radius::FULL)),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(spacing::XS),
            );
        }
        overlay = overlay.push(controls(state, i18n));
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scene)
        .push(overlay)
        .into()
}

fn header<'a>(loaded: &'a LoadedPlace, i18n: &'a I18n) -> Element<'a, Message> {
    let rtl = i18n.is_rtl();
    let title_alignment = if rtl {
        alignment::Horizontal::Right
    } else {
        alignment::Horizontal::Left
    };

    let overlay_button = styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_SUBTLE,
        opacity::OVERLAY_STRONG,
    );

    let back = button(
        Text::new(format!("← {}", i18n.tr("viewer-back"))).shaping(text::Shaping::Advanced),
    )
    .padding([spacing::XS, spacing::MD])
    .on_press(Message::Back)
    .style(overlay_button);

    let title = Text::new(loaded.title(i18n.current_language()))
        .size(typography::TITLE_MD)
        .shaping(text::Shaping::Advanced)
        .width(Length::Fill)
        .align_x(title_alignment);

    let close = tooltip(
        button(Text::new("✕").size(typography::TITLE_SM))
            .padding(spacing::XS)
            .on_press(Message::Close)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_SUBTLE,
                opacity::OVERLAY_STRONG,
            )),
        control_tip(i18n.tr("viewer-close")),
        tooltip::Position::Bottom,
    );

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::MD])
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(title)
        .push(close);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::overlay::header)
        .into()
}

fn controls<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let field_of_view = state.field_of_view();

    let control = |glyph: &'static str, tip: String, message: Option<Message>| {
        let mut control_button = button(
            Container::new(Text::new(glyph).size(typography::TITLE_SM))
                .center(Length::Fixed(sizing::CONTROL_BUTTON - 2.0 * spacing::XXS)),
        )
        .width(Length::Fixed(sizing::CONTROL_BUTTON))
        .height(Length::Fixed(sizing::CONTROL_BUTTON))
        .padding(spacing::XXS)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));
        if let Some(message) = message {
            control_button = control_button.on_press(message);
        }
        tooltip(control_button, control_tip(tip), tooltip::Position::Top)
    };

    let (fullscreen_glyph, fullscreen_key) = if state.is_fullscreen() {
        ("⤡", "viewer-exit-fullscreen")
    } else {
        ("⤢", "viewer-fullscreen")
    };

    let cluster = Row::new()
        .spacing(spacing::XS)
        .push(control(
            "+",
            i18n.tr("viewer-zoom-in"),
            (!field_of_view.is_min()).then_some(Message::ZoomIn),
        ))
        .push(control(
            "−",
            i18n.tr("viewer-zoom-out"),
            (!field_of_view.is_max()).then_some(Message::ZoomOut),
        ))
        .push(control("⟲", i18n.tr("viewer-reset"), Some(Message::ResetView)))
        .push(control(
            fullscreen_glyph,
            i18n.tr(fullscreen_key),
            Some(Message::ToggleFullscreen),
        ));

    Container::new(
        Container::new(cluster)
            .padding(spacing::XS)
            .style(styles::overlay::indicator(radius::FULL)),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::MD)
    .into()
}

fn control_tip<'a>(label: String) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .shaping(text::Shaping::Advanced),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::overlay::indicator(radius::SM))
    .into()
}
