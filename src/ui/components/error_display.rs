// SPDX-License-Identifier: MPL-2.0
//! Error panel with consistent styling.
//!
//! Shows a severity badge, a title, a localized explanation, an optional
//! action button (usually "Back") and collapsible technical details.
//!
//! ```ignore
//! ErrorDisplay::from_fetch_error(&err, i18n)
//!     .action(i18n.tr("viewer-back"), Message::Back)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .details_visible(show_details)
//!     .view()
//! ```

use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, rule, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    #[default]
    Error,
    /// Degraded but usable (e.g. unreadable settings file).
    Warning,
}

impl ErrorSeverity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    action_label: Option<String>,
    action_message: Option<Message>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            show_details: false,
            action_label: None,
            action_message: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    #[must_use]
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Error panel for a failed request, with every label localized.
    #[must_use]
    pub fn from_fetch_error(error: &FetchError, i18n: &I18n) -> Self {
        let args = error.i18n_args();
        let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let mut display = Self::new(ErrorSeverity::Error)
            .title(i18n.tr("error-title"))
            .message(i18n.tr_with_args(error.i18n_key(), &args))
            .details_labels(i18n.tr("error-show-details"), i18n.tr("error-hide-details"));
        if let Some(details) = error.details() {
            display = display.details(details);
        }
        display
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Technical details, hidden behind the toggle.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    #[must_use]
    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self
    }

    /// Whether the panel offers an action button.
    #[must_use]
    pub fn has_action(&self) -> bool {
        self.action_message.is_some()
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.severity.color();

        let badge = Container::new(Text::new("!").size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent)),
                text_color: Some(palette::WHITE),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent),
                },
            ));
        }

        if let Some(message) = self.message {
            content = content.push(
                Text::new(message)
                    .size(typography::BODY)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            content = content.push(
                Container::new(
                    button(Text::new(label))
                        .padding([spacing::XS, spacing::MD])
                        .on_press(msg)
                        .style(button_styles::primary),
                )
                .padding(spacing::XS),
            );
        }

        if let (Some(details), Some(toggle)) = (self.details, self.toggle_details_message) {
            let label = if self.show_details {
                self.hide_details_label
            } else {
                self.show_details_label
            };
            content = content.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(toggle)
                    .style(button::text),
            );

            if self.show_details {
                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(Text::new(details).size(typography::CAPTION).style(
                            |theme: &Theme| text::Style {
                                color: Some(theme.extended_palette().secondary.base.text),
                            },
                        )),
                );
            }
        }

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(badge)
            .push(content);

        Container::new(row)
            .width(Length::Fill)
            .max_width(sizing::PANEL_MAX_WIDTH)
            .padding(spacing::LG)
            .style(container_styles::panel)
            .into()
    }
}

/// Error panel centered in the available space.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Language;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Back,
        ToggleDetails,
    }

    fn i18n() -> I18n {
        I18n::from_sources([
            (
                Language::French,
                "error-title = Erreur\nerror-http-status = Le serveur a répondu { $status }\nerror-no-response = Pas de réponse\nerror-show-details = Détails\nerror-hide-details = Masquer\n"
                    .to_string(),
            ),
        ])
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(ErrorSeverity::Error.color(), ErrorSeverity::Warning.color());
    }

    #[test]
    fn status_error_message_includes_code() {
        let display: ErrorDisplay<TestMessage> =
            ErrorDisplay::from_fetch_error(&FetchError::Status(404), &i18n());
        assert_eq!(display.title.as_deref(), Some("Erreur"));
        assert_eq!(display.message.as_deref(), Some("Le serveur a répondu 404"));
        assert!(display.details.is_none());
    }

    #[test]
    fn transport_error_keeps_details() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::from_fetch_error(
            &FetchError::Transport("connection refused".into()),
            &i18n(),
        )
        .on_toggle_details(TestMessage::ToggleDetails);
        assert_eq!(display.message.as_deref(), Some("Pas de réponse"));
        assert_eq!(display.details.as_deref(), Some("connection refused"));
        assert_eq!(display.show_details_label, "Détails");
        assert_eq!(display.hide_details_label, "Masquer");
    }

    #[test]
    fn action_is_recorded() {
        let display: ErrorDisplay<TestMessage> =
            ErrorDisplay::new(ErrorSeverity::Error).action("Retour", TestMessage::Back);
        assert!(display.has_action());
        assert_eq!(display.action_message, Some(TestMessage::Back));
    }
}
