// SPDX-License-Identifier: MPL-2.0
//! Panorama viewer component encapsulating state and update logic.
//!
//! The component owns the place being shown and the camera (behind the
//! [`ViewportController`] port); drawing is left to the panorama shader.
//! Fetches are tagged with a generation so that responses for an abandoned
//! navigation never reach the screen.

use super::state::{LoadedPlace, Phase, TextureState};
use crate::application::port::{PlaceProvider, ViewportController, ViewportState};
use crate::application::query::RequestTracker;
use crate::diagnostics::{AppOperation, DiagnosticsCollector, UserAction};
use crate::domain::{EquirectImage, FieldOfView, Language, Place, PlaceId};
use crate::error::FetchError;
use crate::ui::widgets::PanoramaScene;
use iced::{event, keyboard, mouse, window, Point, Size, Subscription, Task};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Spinner rotation per animation tick, in radians.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone)]
pub enum Message {
    PlaceLoaded {
        generation: u64,
        /// URL the request was issued for.
        resource: String,
        result: Result<Place, FetchError>,
    },
    TextureLoaded {
        generation: u64,
        resource: String,
        result: Result<EquirectImage, FetchError>,
    },
    ZoomIn,
    ZoomOut,
    ResetView,
    ToggleFullscreen,
    /// The window mode changed; sent back by the application.
    FullscreenChanged(bool),
    Back,
    Close,
    ToggleErrorDetails,
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    SpinnerTick,
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    NavigateBack,
    ToggleFullscreen,
    ExitFullscreen,
}

pub struct State {
    phase: Phase,
    fullscreen: bool,
    viewport: Box<dyn ViewportController>,
    provider: Arc<dyn PlaceProvider>,
    /// Fixed rotation of the sphere around the vertical axis.
    sphere_yaw: f32,
    place_request: RequestTracker,
    texture_request: RequestTracker,
    viewport_size: Size,
    cursor: Option<Point>,
    /// Last cursor position of an active drag.
    drag_anchor: Option<Point>,
    has_dragged: bool,
    spinner_rotation: f32,
    show_error_details: bool,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("phase", &self.phase)
            .field("fullscreen", &self.fullscreen)
            .field("viewport", &self.viewport.state())
            .field("generation", &self.place_request.generation())
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(
        provider: Arc<dyn PlaceProvider>,
        viewport: Box<dyn ViewportController>,
        sphere_yaw: f32,
    ) -> Self {
        Self {
            phase: Phase::Loading,
            fullscreen: false,
            viewport,
            provider,
            sphere_yaw,
            place_request: RequestTracker::new(),
            texture_request: RequestTracker::new(),
            viewport_size: Size::ZERO,
            cursor: None,
            drag_anchor: None,
            has_dragged: false,
            spinner_rotation: 0.0,
            show_error_details: false,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn field_of_view(&self) -> FieldOfView {
        self.viewport.state().field_of_view
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.state()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Generation of the latest place request.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.place_request.generation()
    }

    /// Generation of the latest panorama request.
    #[must_use]
    pub fn texture_generation(&self) -> u64 {
        self.texture_request.generation()
    }

    /// Place name in `language`, once the place is known.
    #[must_use]
    pub fn title(&self, language: Language) -> Option<&str> {
        self.phase.loaded_place().map(|loaded| loaded.title(language))
    }

    #[must_use]
    pub fn texture_url(&self) -> Option<&str> {
        self.phase
            .loaded_place()
            .map(|loaded| loaded.image_url.as_str())
    }

    /// The panorama and camera to draw, once the texture is loaded.
    #[must_use]
    pub fn scene(&self) -> Option<PanoramaScene> {
        let image = self
            .phase
            .loaded_place()
            .and_then(LoadedPlace::texture_image)?;
        Some(PanoramaScene {
            image: image.clone(),
            camera: self.viewport.state(),
            sphere_yaw: self.sphere_yaw,
        })
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn show_error_details(&self) -> bool {
        self.show_error_details
    }

    /// Whether the visitor has rotated the view at least once.
    #[must_use]
    pub fn has_dragged(&self) -> bool {
        self.has_dragged
    }

    // ------------------------------------------------------------------
    // Opening places
    // ------------------------------------------------------------------

    /// Fetches place `id`, then its panorama. Any earlier request is
    /// superseded.
    pub fn open_place(
        &mut self,
        id: &PlaceId,
        diagnostics: &mut DiagnosticsCollector,
    ) -> Task<Message> {
        let resource = format!("{}/lieus/{}", self.provider.api_base(), id);
        let generation = self.place_request.begin();
        self.texture_request.cancel();
        self.phase = Phase::Loading;
        self.reset_interaction();

        diagnostics.log_operation(AppOperation::FetchStarted {
            resource: resource.clone(),
            generation,
        });

        Task::perform(self.provider.fetch_place(id), move |result| {
            Message::PlaceLoaded {
                generation,
                resource,
                result,
            }
        })
    }

    /// Shows a place that is already known, skipping the record fetch.
    pub fn open_static(
        &mut self,
        place: Place,
        diagnostics: &mut DiagnosticsCollector,
    ) -> Task<Message> {
        self.place_request.cancel();
        self.reset_interaction();
        self.enter_ready(place, diagnostics)
    }

    /// Per-place interaction state: a new place shows the drag hint again.
    fn reset_interaction(&mut self) {
        self.drag_anchor = None;
        self.has_dragged = false;
        self.show_error_details = false;
    }

    fn enter_ready(&mut self, place: Place, diagnostics: &mut DiagnosticsCollector) -> Task<Message> {
        let loaded = LoadedPlace::new(place, self.provider.api_base());
        let url = loaded.image_url.clone();
        let generation = self.texture_request.begin();
        self.phase = Phase::Ready(Box::new(loaded));

        diagnostics.log_operation(AppOperation::FetchStarted {
            resource: url.clone(),
            generation,
        });

        Task::perform(self.provider.fetch_image(&url), move |result| {
            Message::TextureLoaded {
                generation,
                resource: url,
                result,
            }
        })
    }

    /// Updates the drawing area, e.g. when the viewer is created for an
    /// already open window.
    pub fn set_viewport_size(&mut self, size: Size) {
        if size == self.viewport_size {
            return;
        }
        self.viewport_size = size;
        self.viewport.set_viewport_height(size.height);
    }

    // ------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------

    pub fn handle_message(
        &mut self,
        message: Message,
        diagnostics: &mut DiagnosticsCollector,
    ) -> (Effect, Task<Message>) {
        match message {
            Message::PlaceLoaded {
                generation,
                resource,
                result,
            } => {
                let task = self.on_place_loaded(generation, resource, result, diagnostics);
                return (Effect::None, task);
            }
            Message::TextureLoaded {
                generation,
                resource,
                result,
            } => {
                self.on_texture_loaded(generation, resource, result, diagnostics);
            }
            Message::ZoomIn => {
                diagnostics.log_action(UserAction::ZoomIn);
                self.apply_field_of_view(self.field_of_view().zoom_in());
            }
            Message::ZoomOut => {
                diagnostics.log_action(UserAction::ZoomOut);
                self.apply_field_of_view(self.field_of_view().zoom_out());
            }
            Message::ResetView => {
                diagnostics.log_action(UserAction::ResetView);
                self.viewport.reset();
                self.drag_anchor = None;
            }
            Message::ToggleFullscreen => {
                diagnostics.log_action(UserAction::ToggleFullscreen);
                return (Effect::ToggleFullscreen, Task::none());
            }
            Message::FullscreenChanged(fullscreen) => {
                self.fullscreen = fullscreen;
            }
            Message::Back | Message::Close => {
                self.drag_anchor = None;
                return (Effect::NavigateBack, Task::none());
            }
            Message::ToggleErrorDetails => {
                self.show_error_details = !self.show_error_details;
            }
            Message::RawEvent { event, .. } => {
                return (self.handle_raw_event(event, diagnostics), Task::none());
            }
            Message::SpinnerTick => {
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
            }
        }
        (Effect::None, Task::none())
    }

    fn on_place_loaded(
        &mut self,
        generation: u64,
        resource: String,
        result: Result<Place, FetchError>,
        diagnostics: &mut DiagnosticsCollector,
    ) -> Task<Message> {
        let Some(elapsed) = self.place_request.finish(generation) else {
            diagnostics.log_operation(AppOperation::StaleResponseDiscarded {
                resource,
                generation,
            });
            return Task::none();
        };

        match result {
            Ok(place) => {
                diagnostics.log_operation(AppOperation::FetchSucceeded {
                    resource,
                    generation,
                    duration_ms: elapsed.as_millis() as u64,
                });
                self.enter_ready(place, diagnostics)
            }
            Err(error) => {
                diagnostics.log_operation(AppOperation::FetchFailed {
                    resource,
                    generation,
                    error: error.to_string(),
                });
                self.phase = Phase::Failed(error);
                Task::none()
            }
        }
    }

    fn on_texture_loaded(
        &mut self,
        generation: u64,
        resource: String,
        result: Result<EquirectImage, FetchError>,
        diagnostics: &mut DiagnosticsCollector,
    ) {
        let Some(elapsed) = self.texture_request.finish(generation) else {
            diagnostics.log_operation(AppOperation::StaleResponseDiscarded {
                resource,
                generation,
            });
            return;
        };
        let Phase::Ready(loaded) = &mut self.phase else {
            return;
        };

        match result {
            Ok(image) => {
                diagnostics.log_operation(AppOperation::TextureLoaded {
                    width: image.width(),
                    height: image.height(),
                    duration_ms: elapsed.as_millis() as u64,
                });
                loaded.texture = TextureState::Loaded(image);
            }
            Err(error) => {
                diagnostics.log_operation(AppOperation::FetchFailed {
                    resource,
                    generation,
                    error: error.to_string(),
                });
                loaded.texture = TextureState::Failed(error);
            }
        }
    }

    fn handle_raw_event(
        &mut self,
        event: event::Event,
        diagnostics: &mut DiagnosticsCollector,
    ) -> Effect {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                self.set_viewport_size(size);
            }
            event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if self.phase.has_texture() {
                    let steps = scroll_steps(&delta);
                    if steps != 0.0 {
                        self.apply_field_of_view(self.field_of_view().zoom_by_steps(steps));
                    }
                }
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if self.phase.has_texture() {
                    self.drag_anchor = self.cursor;
                }
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.cursor = Some(position);
                if let Some(anchor) = self.drag_anchor {
                    self.viewport
                        .orbit(position.x - anchor.x, position.y - anchor.y);
                    self.drag_anchor = Some(position);
                    self.has_dragged = true;
                }
            }
            event::Event::Mouse(
                mouse::Event::ButtonReleased(mouse::Button::Left) | mouse::Event::CursorLeft,
            ) => {
                self.drag_anchor = None;
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                return self.handle_key(key, diagnostics);
            }
            _ => {}
        }
        Effect::None
    }

    fn handle_key(&mut self, key: keyboard::Key, diagnostics: &mut DiagnosticsCollector) -> Effect {
        match key.as_ref() {
            keyboard::Key::Named(keyboard::key::Named::Escape) if self.fullscreen => {
                diagnostics.log_action(UserAction::ExitFullscreen);
                Effect::ExitFullscreen
            }
            keyboard::Key::Named(keyboard::key::Named::F11) => {
                diagnostics.log_action(UserAction::ToggleFullscreen);
                Effect::ToggleFullscreen
            }
            keyboard::Key::Character("+" | "=") => {
                diagnostics.log_action(UserAction::ZoomIn);
                self.apply_field_of_view(self.field_of_view().zoom_in());
                Effect::None
            }
            keyboard::Key::Character("-") => {
                diagnostics.log_action(UserAction::ZoomOut);
                self.apply_field_of_view(self.field_of_view().zoom_out());
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn apply_field_of_view(&mut self, field_of_view: FieldOfView) {
        self.viewport.set_field_of_view(field_of_view);
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.phase.is_waiting() {
            iced::time::every(Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }
}

/// Wheel notches, positive when scrolling up.
fn scroll_steps(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => *y,
        mouse::ScrollDelta::Pixels { y, .. } => *y / 120.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchFuture;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::{Event, Text};
    use crate::panorama::OrbitCamera;
    use futures_util::future::{ready, FutureExt};

    struct StubProvider;

    impl PlaceProvider for StubProvider {
        fn fetch_place(&self, _id: &PlaceId) -> FetchFuture<Place> {
            ready(Err(FetchError::NotFound)).boxed()
        }

        fn fetch_events(&self) -> FetchFuture<Vec<Event>> {
            ready(Ok(Vec::new())).boxed()
        }

        fn fetch_image(&self, _url: &str) -> FetchFuture<EquirectImage> {
            ready(Err(FetchError::Image("stub".into()))).boxed()
        }

        fn api_base(&self) -> &str {
            "http://localhost:8000"
        }
    }

    fn viewer() -> State {
        State::new(Arc::new(StubProvider), Box::new(OrbitCamera::new()), 0.0)
    }

    fn place(name: &str) -> Place {
        Place {
            id: PlaceId::from(42),
            name: Text::from(name),
            image: "mihrab.jpg".to_string(),
            description: None,
        }
    }

    fn gray_image() -> EquirectImage {
        EquirectImage::from_rgba(8, 4, vec![128; 8 * 4 * 4]).expect("valid image")
    }

    fn log() -> DiagnosticsCollector {
        DiagnosticsCollector::silent(64)
    }

    fn raw(event: event::Event) -> Message {
        Message::RawEvent {
            window: window::Id::unique(),
            event,
        }
    }

    #[test]
    fn static_place_goes_straight_to_ready() {
        let mut state = viewer();
        let _ = state.open_static(place("Minaret"), &mut log());
        assert_eq!(state.title(Language::French), Some("Minaret"));
        assert!(state.phase().is_waiting());
    }

    /// Opens a static place and delivers its panorama.
    fn show_textured(state: &mut State, log: &mut DiagnosticsCollector) {
        let _ = state.open_static(place("Mihrab"), log);
        let generation = state.texture_generation();
        let resource = state.texture_url().unwrap_or_default().to_string();
        let _ = state.handle_message(
            Message::TextureLoaded {
                generation,
                resource,
                result: Ok(gray_image()),
            },
            log,
        );
    }

    fn drag(state: &mut State, log: &mut DiagnosticsCollector, from: Point, to: Point) {
        let move_to = |position| raw(event::Event::Mouse(mouse::Event::CursorMoved { position }));
        let _ = state.handle_message(move_to(from), log);
        let _ = state.handle_message(
            raw(event::Event::Mouse(mouse::Event::ButtonPressed(
                mouse::Button::Left,
            ))),
            log,
        );
        let _ = state.handle_message(move_to(to), log);
        let _ = state.handle_message(
            raw(event::Event::Mouse(mouse::Event::ButtonReleased(
                mouse::Button::Left,
            ))),
            log,
        );
    }

    #[test]
    fn stale_place_response_is_ignored() {
        let mut state = viewer();
        let mut log = log();
        let _ = state.open_place(&PlaceId::from(1), &mut log);
        let first = state.generation();
        let _ = state.open_place(&PlaceId::from(2), &mut log);

        let _ = state.handle_message(
            Message::PlaceLoaded {
                generation: first,
                resource: "http://localhost:8000/lieus/1".to_string(),
                result: Ok(place("Old")),
            },
            &mut log,
        );
        assert!(state.phase().is_loading());
    }

    #[test]
    fn discarded_response_is_logged_with_its_own_url() {
        let mut state = viewer();
        let mut log = log();
        let _ = state.open_place(&PlaceId::from(1), &mut log);
        let first = state.generation();
        let _ = state.open_place(&PlaceId::from(2), &mut log);

        let _ = state.handle_message(
            Message::PlaceLoaded {
                generation: first,
                resource: "http://localhost:8000/lieus/1".to_string(),
                result: Ok(place("Old")),
            },
            &mut log,
        );
        let Some(DiagnosticEventKind::Operation {
            operation: AppOperation::StaleResponseDiscarded { resource, generation },
        }) = log.last_kind()
        else {
            panic!("expected a discarded response, got {:?}", log.last_kind());
        };
        assert_eq!(resource, "http://localhost:8000/lieus/1");
        assert_eq!(*generation, first);
    }

    #[test]
    fn scene_is_available_once_texture_arrives() {
        let mut state = viewer();
        let mut log = log();
        let _ = state.open_static(place("Mihrab"), &mut log);
        assert!(state.scene().is_none());

        show_textured(&mut state, &mut log);
        assert!(state.phase().has_texture());
        let scene = state.scene().expect("texture loaded");
        assert_eq!((scene.image.width(), scene.image.height()), (8, 4));
        assert_eq!(scene.sphere_yaw, 0.0);
    }

    #[test]
    fn camera_moves_reuse_the_uploaded_texture() {
        let mut state = viewer();
        let mut log = log();
        show_textured(&mut state, &mut log);
        state.set_viewport_size(Size::new(80.0, 60.0));
        let before = state.scene().expect("texture loaded");

        let _ = state.handle_message(Message::ZoomIn, &mut log);
        drag(&mut state, &mut log, Point::new(10.0, 10.0), Point::new(40.0, 10.0));

        let after = state.scene().expect("texture loaded");
        assert_eq!(after.image.id(), before.image.id());
        assert_ne!(after.camera, before.camera);
        assert_eq!(after.camera.field_of_view.degrees(), 85.0);
    }

    #[test]
    fn wheel_up_zooms_in() {
        let mut state = viewer();
        let mut log = log();
        show_textured(&mut state, &mut log);

        let _ = state.handle_message(
            raw(event::Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            })),
            &mut log,
        );
        assert_eq!(state.field_of_view().degrees(), 85.0);
    }

    #[test]
    fn drag_orbits_camera() {
        let mut state = viewer();
        let mut log = log();
        show_textured(&mut state, &mut log);
        state.set_viewport_size(Size::new(80.0, 60.0));

        drag(&mut state, &mut log, Point::new(10.0, 10.0), Point::new(40.0, 10.0));

        assert!(state.has_dragged());
        // Inverted orbit: dragging right turns the view left
        assert!(state.viewport_state().orientation.yaw() < 0.0);
        let scene = state.scene().expect("texture loaded");
        assert_eq!(scene.camera, state.viewport_state());
    }

    #[test]
    fn opening_another_place_shows_the_drag_hint_again() {
        let mut state = viewer();
        let mut log = log();
        show_textured(&mut state, &mut log);
        state.set_viewport_size(Size::new(80.0, 60.0));
        drag(&mut state, &mut log, Point::new(10.0, 10.0), Point::new(40.0, 10.0));
        assert!(state.has_dragged());

        let _ = state.open_static(place("Minaret"), &mut log);
        assert!(!state.has_dragged());

        drag(&mut state, &mut log, Point::new(10.0, 10.0), Point::new(40.0, 10.0));
        let _ = state.open_place(&PlaceId::from(7), &mut log);
        assert!(!state.has_dragged());
    }

    #[test]
    fn escape_exits_only_when_fullscreen() {
        let mut state = viewer();
        let mut log = log();
        let escape = || keyboard::Key::Named(keyboard::key::Named::Escape);

        assert_eq!(state.handle_key(escape(), &mut log), Effect::None);

        let _ = state.handle_message(Message::FullscreenChanged(true), &mut log);
        assert_eq!(state.handle_key(escape(), &mut log), Effect::ExitFullscreen);
    }

    #[test]
    fn scroll_steps_normalizes_pixels() {
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Pixels { x: 0.0, y: 240.0 }),
            2.0
        );
        assert_eq!(
            scroll_steps(&mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 }),
            -1.0
        );
    }
}
