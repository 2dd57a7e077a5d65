// SPDX-License-Identifier: MPL-2.0
//! Events listing screen.
//!
//! Fetches `/evenements` each time the screen is entered and filters the
//! result locally by status. Event pictures are fetched once the listing
//! has arrived and shown on the cards as they come in.

use crate::application::port::PlaceProvider;
use crate::application::query::RequestTracker;
use crate::diagnostics::{AppOperation, DiagnosticsCollector, UserAction};
use crate::domain::{EquirectImage, Event, EventFilter};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use chrono::{Datelike, NaiveDate};
use iced::widget::{button, image, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Subscription, Task};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Event>),
    Failed(FetchError),
}

#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    filter: EventFilter,
    request: RequestTracker,
    spinner_rotation: f32,
    show_error_details: bool,
    /// Decoded pictures by event id, for the current listing only.
    pictures: HashMap<String, image::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded {
        generation: u64,
        /// URL the request was issued for.
        resource: String,
        result: Result<Vec<Event>, FetchError>,
    },
    PictureLoaded {
        generation: u64,
        event_id: String,
        result: Result<EquirectImage, FetchError>,
    },
    SetFilter(EventFilter),
    ToggleErrorDetails,
    Back,
    SpinnerTick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    NavigateBack,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn filter(&self) -> EventFilter {
        self.filter
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.request.generation()
    }

    /// Picture of `event_id`, once downloaded.
    #[must_use]
    pub fn picture(&self, event_id: &str) -> Option<&image::Handle> {
        self.pictures.get(event_id)
    }

    /// Events accepted by the active filter.
    pub fn visible_events(&self) -> impl Iterator<Item = &Event> + '_ {
        let events: &[Event] = match &self.phase {
            Phase::Loaded(events) => events,
            _ => &[],
        };
        self.filter.apply(events)
    }

    /// Starts (or restarts) the fetch. Any response to an earlier request
    /// will be discarded. A successful listing is followed by one picture
    /// download per event that has one.
    pub fn load(
        &mut self,
        provider: &Arc<dyn PlaceProvider>,
        diagnostics: &mut DiagnosticsCollector,
    ) -> Task<Message> {
        let resource = format!("{}/evenements", provider.api_base());
        let generation = self.request.begin();
        self.phase = Phase::Loading;
        self.show_error_details = false;
        self.pictures.clear();
        diagnostics.log_operation(AppOperation::FetchStarted {
            resource: resource.clone(),
            generation,
        });

        let listing = provider.fetch_events();
        let provider = Arc::clone(provider);
        Task::perform(listing, std::convert::identity).then(move |result| {
            let pictures = match &result {
                Ok(events) => fetch_pictures(&provider, events, generation),
                Err(_) => Task::none(),
            };
            Task::done(Message::Loaded {
                generation,
                resource: resource.clone(),
                result,
            })
            .chain(pictures)
        })
    }

    /// Drops the outstanding request, e.g. when the screen is left.
    pub fn cancel(&mut self) {
        if self.request.is_pending() {
            self.request.cancel();
            self.phase = Phase::Idle;
        }
    }

    pub fn handle_message(
        &mut self,
        message: Message,
        diagnostics: &mut DiagnosticsCollector,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::Loaded {
                generation,
                resource,
                result,
            } => {
                let Some(elapsed) = self.request.finish(generation) else {
                    diagnostics.log_operation(AppOperation::StaleResponseDiscarded {
                        resource,
                        generation,
                    });
                    return (Effect::None, Task::none());
                };

                self.phase = match result {
                    Ok(events) => {
                        diagnostics.log_operation(AppOperation::FetchSucceeded {
                            resource,
                            generation,
                            duration_ms: elapsed.as_millis() as u64,
                        });
                        Phase::Loaded(events)
                    }
                    Err(error) => {
                        diagnostics.log_operation(AppOperation::FetchFailed {
                            resource,
                            generation,
                            error: error.to_string(),
                        });
                        Phase::Failed(error)
                    }
                };
            }
            Message::PictureLoaded {
                generation,
                event_id,
                result,
            } => {
                if generation != self.request.generation()
                    || !matches!(self.phase, Phase::Loaded(_))
                {
                    return (Effect::None, Task::none());
                }
                match result {
                    Ok(picture) => {
                        let handle = image::Handle::from_rgba(
                            picture.width(),
                            picture.height(),
                            picture.rgba_bytes().to_vec(),
                        );
                        self.pictures.insert(event_id, handle);
                    }
                    Err(error) => {
                        diagnostics.log_warning(format!("picture of event {event_id}: {error}"));
                    }
                }
            }
            Message::SetFilter(filter) => {
                if filter != self.filter {
                    diagnostics.log_action(UserAction::FilterEvents {
                        filter: format!("{filter:?}").to_lowercase(),
                    });
                    self.filter = filter;
                }
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
            }
            Message::Back => return (Effect::NavigateBack, Task::none()),
            Message::SpinnerTick => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
            }
        }
        (Effect::None, Task::none())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if matches!(self.phase, Phase::Loading) {
            iced::time::every(Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        match &self.phase {
            Phase::Failed(error) => centered_error_view(
                ErrorDisplay::from_fetch_error(error, i18n)
                    .action(i18n.tr("viewer-back"), Message::Back)
                    .on_toggle_details(Message::ToggleErrorDetails)
                    .details_visible(self.show_error_details),
            ),
            Phase::Idle | Phase::Loading => Container::new(
                Column::new()
                    .spacing(spacing::MD)
                    .align_x(alignment::Horizontal::Center)
                    .push(AnimatedSpinner::new(palette::EMERALD_500, self.spinner_rotation).into_element())
                    .push(Text::new(i18n.tr("events-loading")).shaping(text::Shaping::Advanced)),
            )
            .center(Length::Fill)
            .into(),
            Phase::Loaded(_) => self.list_view(i18n),
        }
    }

    fn list_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let horizontal = if i18n.is_rtl() {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        };

        let filters = EventFilter::ALL
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, filter| {
                let style = if filter == self.filter {
                    styles::button::selected
                } else {
                    styles::button::unselected
                };
                row.push(
                    button(Text::new(i18n.tr(filter.i18n_key())).shaping(text::Shaping::Advanced))
                        .padding([spacing::XXS, spacing::MD])
                        .on_press(Message::SetFilter(filter))
                        .style(style),
                )
            });

        let mut column = Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(horizontal)
            .push(
                Text::new(i18n.tr("events-title"))
                    .size(typography::TITLE_LG)
                    .shaping(text::Shaping::Advanced),
            )
            .push(
                Text::new(i18n.tr("events-subtitle"))
                    .size(typography::BODY_LG)
                    .shaping(text::Shaping::Advanced),
            )
            .push(filters);

        let mut any = false;
        for event in self.visible_events() {
            any = true;
            column = column.push(event_card(i18n, event, self.picture(&event.id)));
        }
        if !any {
            column = column.push(Text::new(i18n.tr("events-empty")).shaping(text::Shaping::Advanced));
        }

        scrollable(column).height(Length::Fill).into()
    }
}

/// One download per event picture, tagged with the listing's generation.
fn fetch_pictures(
    provider: &Arc<dyn PlaceProvider>,
    events: &[Event],
    generation: u64,
) -> Task<Message> {
    let api_base = provider.api_base();
    Task::batch(events.iter().filter_map(|event| {
        let url = event.image_url(api_base)?;
        let event_id = event.id.clone();
        Some(Task::perform(provider.fetch_image(&url), move |result| {
            Message::PictureLoaded {
                generation,
                event_id,
                result,
            }
        }))
    }))
}

fn event_card<'a>(
    i18n: &I18n,
    event: &'a Event,
    picture: Option<&image::Handle>,
) -> Element<'a, Message> {
    let mut details = vec![format_event_date(i18n, &event.date)];
    if !event.time.is_empty() {
        details.push(event.time.clone());
    }
    if !event.location.is_empty() {
        details.push(event.location.clone());
    }

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(event.title.as_str())
                .size(typography::TITLE_SM)
                .shaping(text::Shaping::Advanced),
        )
        .push(
            Text::new(details.join(" · "))
                .size(typography::BODY_SM)
                .shaping(text::Shaping::Advanced),
        );
    if !event.kind.is_empty() {
        body = body.push(
            Text::new(event.kind.as_str())
                .size(typography::CAPTION)
                .color(palette::EMERALD_600),
        );
    }

    let mut card = Column::new().spacing(spacing::SM);
    if let Some(handle) = picture {
        card = card.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::EVENT_IMAGE_HEIGHT))
                .content_fit(ContentFit::Cover),
        );
    }
    card = card.push(body);

    Container::new(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

/// Formats a `YYYY-MM-DD` date with localized weekday and month names.
/// Unparseable dates are shown as sent.
#[must_use]
pub fn format_event_date(i18n: &I18n, date: &str) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
        return date.to_string();
    };

    let weekday = i18n.tr(&format!("weekday-{}", parsed.weekday().number_from_monday()));
    let month = i18n.tr(&format!("month-{}", parsed.month()));
    let day = parsed.day().to_string();
    let year = parsed.year().to_string();

    i18n.tr_with_args(
        "events-date-format",
        &[
            ("weekday", weekday.as_str()),
            ("day", day.as_str()),
            ("month", month.as_str()),
            ("year", year.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EventStatus, Language};

    const EVENTS_URL: &str = "http://localhost:8000/evenements";

    fn event(id: &str, status: EventStatus) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Conférence {id}"),
            date: "2025-03-14".to_string(),
            time: "20:00".to_string(),
            location: "Esplanade".to_string(),
            image: None,
            kind: "conference".to_string(),
            status,
        }
    }

    fn loaded(state: &mut State, events: Vec<Event>) {
        let generation = state.request.begin();
        state.phase = Phase::Loading;
        let mut log = DiagnosticsCollector::silent(16);
        state.handle_message(
            Message::Loaded {
                generation,
                resource: EVENTS_URL.to_string(),
                result: Ok(events),
            },
            &mut log,
        );
    }

    #[test]
    fn load_result_replaces_loading_phase() {
        let mut state = State::new();
        loaded(&mut state, vec![event("1", EventStatus::Upcoming)]);
        assert!(matches!(state.phase(), Phase::Loaded(events) if events.len() == 1));
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = State::new();
        let mut log = DiagnosticsCollector::silent(16);
        let old = state.request.begin();
        let _new = state.request.begin();
        state.phase = Phase::Loading;

        state.handle_message(
            Message::Loaded {
                generation: old,
                resource: EVENTS_URL.to_string(),
                result: Err(FetchError::Status(500)),
            },
            &mut log,
        );
        assert!(matches!(state.phase(), Phase::Loading));
        assert!(matches!(
            log.last_kind(),
            Some(crate::diagnostics::DiagnosticEventKind::Operation {
                operation: AppOperation::StaleResponseDiscarded { .. }
            })
        ));
    }

    fn picture(generation: u64, event_id: &str) -> Message {
        Message::PictureLoaded {
            generation,
            event_id: event_id.to_string(),
            result: EquirectImage::from_rgba(2, 1, vec![90; 8])
                .ok_or_else(|| FetchError::Image("empty".into())),
        }
    }

    #[test]
    fn picture_for_current_listing_is_kept() {
        let mut state = State::new();
        loaded(&mut state, vec![event("1", EventStatus::Upcoming)]);
        let mut log = DiagnosticsCollector::silent(16);

        state.handle_message(picture(state.generation(), "1"), &mut log);
        assert!(state.picture("1").is_some());
        assert!(state.picture("2").is_none());
    }

    #[test]
    fn picture_of_an_earlier_listing_is_dropped() {
        let mut state = State::new();
        loaded(&mut state, vec![event("1", EventStatus::Upcoming)]);
        let old = state.generation();
        loaded(&mut state, vec![event("1", EventStatus::Upcoming)]);
        let mut log = DiagnosticsCollector::silent(16);

        state.handle_message(picture(old, "1"), &mut log);
        assert!(state.picture("1").is_none());
    }

    #[test]
    fn picture_failure_is_logged_and_card_stays_textual() {
        let mut state = State::new();
        loaded(&mut state, vec![event("1", EventStatus::Upcoming)]);
        let mut log = DiagnosticsCollector::silent(16);

        state.handle_message(
            Message::PictureLoaded {
                generation: state.generation(),
                event_id: "1".to_string(),
                result: Err(FetchError::Status(404)),
            },
            &mut log,
        );
        assert!(state.picture("1").is_none());
        assert!(matches!(
            log.last_kind(),
            Some(crate::diagnostics::DiagnosticEventKind::Warning { message })
                if message.contains("event 1")
        ));
    }

    #[test]
    fn filter_limits_visible_events() {
        let mut state = State::new();
        loaded(
            &mut state,
            vec![
                event("1", EventStatus::Upcoming),
                event("2", EventStatus::Past),
                event("3", EventStatus::Upcoming),
            ],
        );
        let mut log = DiagnosticsCollector::silent(16);
        state.handle_message(Message::SetFilter(EventFilter::Past), &mut log);
        let ids: Vec<_> = state.visible_events().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn back_is_an_effect() {
        let mut state = State::new();
        let mut log = DiagnosticsCollector::silent(4);
        let (effect, _) = state.handle_message(Message::Back, &mut log);
        assert_eq!(effect, Effect::NavigateBack);
    }

    #[test]
    fn dates_use_localized_names() {
        let i18n = I18n::from_sources([
            (
                Language::French,
                "events-date-format = { $weekday } { $day } { $month } { $year }\nweekday-5 = vendredi\nmonth-3 = mars\n"
                    .to_string(),
            ),
            (
                Language::English,
                "events-date-format = { $weekday }, { $month } { $day }, { $year }\nweekday-5 = Friday\nmonth-3 = March\n"
                    .to_string(),
            ),
        ]);
        assert_eq!(format_event_date(&i18n, "2025-03-14"), "vendredi 14 mars 2025");
        assert_eq!(
            i18n.tr_in(Language::English, "weekday-5"),
            "Friday"
        );
        let mut english = i18n;
        english.set_language(Language::English);
        assert_eq!(format_event_date(&english, "2025-03-14"), "Friday, March 14, 2025");
    }

    #[test]
    fn unparseable_date_is_kept() {
        let i18n = I18n::from_sources([(Language::French, String::new())]);
        assert_eq!(format_event_date(&i18n, "bientôt"), "bientôt");
    }
}
