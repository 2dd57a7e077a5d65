// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the listing screens and
//! the panorama viewer.
//!
//! The `App` struct owns the route history, the translation bundles and the
//! place provider, and translates component effects into navigation or
//! window-mode changes.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::PlaceProvider;
use crate::application::query::RouteHistory;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::Route;
use crate::i18n::fluent::I18n;
use crate::ui::events;
use crate::ui::theming::AppTheme;
use crate::ui::viewer::component;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Everything the application needs before its first frame.
pub struct Startup {
    pub flags: Flags,
    pub config: Config,
    /// Translation key describing a configuration problem, if any.
    pub config_warning: Option<String>,
    pub provider: Arc<dyn PlaceProvider>,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    screen: Screen,
    history: RouteHistory,
    provider: Arc<dyn PlaceProvider>,
    /// Present while a viewer route is shown.
    viewer: Option<component::State>,
    events: events::State,
    diagnostics: DiagnosticsCollector,
    fullscreen: bool,
    window_id: Option<window::Id>,
    window_size: Option<Size>,
    language_menu_open: bool,
    /// Translation key of a dismissable warning banner.
    config_warning: Option<String>,
    sphere_yaw: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("route", self.history.current())
            .field("fullscreen", &self.fullscreen)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(startup: Startup) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; the startup data is consumed once.
    let boot_state = RefCell::new(Some(startup));
    let boot = move || match boot_state.borrow_mut().take() {
        Some(startup) => App::new(startup),
        None => unreachable!("boot function called more than once"),
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and opens the initial route.
    fn new(startup: Startup) -> (Self, Task<Message>) {
        let Startup {
            flags,
            config,
            config_warning,
            provider,
        } = startup;

        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let mut diagnostics = DiagnosticsCollector::new(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        if let Some(key) = &config_warning {
            diagnostics.log_warning(i18n.tr(key));
        }

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            screen: Screen::Tour,
            history: RouteHistory::default(),
            provider,
            viewer: None,
            events: events::State::new(),
            diagnostics,
            fullscreen: false,
            window_id: None,
            window_size: None,
            language_menu_open: false,
            config_warning,
            sphere_yaw: config
                .viewer
                .initial_yaw
                .unwrap_or(config::DEFAULT_INITIAL_YAW),
        };

        let task = match flags.initial_route {
            Some(path) => update::open_path(&mut app.update_context(), &path),
            None => Task::none(),
        };

        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            history: &mut self.history,
            provider: &self.provider,
            viewer: &mut self.viewer,
            events: &mut self.events,
            diagnostics: &mut self.diagnostics,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            window_size: &mut self.window_size,
            language_menu_open: &mut self.language_menu_open,
            sphere_yaw: self.sphere_yaw,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let place_name = (self.screen == Screen::Viewer)
            .then(|| self.viewer.as_ref())
            .flatten()
            .and_then(|viewer| viewer.title(self.i18n.current_language()));

        match place_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let animation_sub = subscription::create_animation_subscription(
            self.screen,
            self.viewer.as_ref(),
            &self.events,
        );

        Subscription::batch([event_sub, animation_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut self.update_context(), viewer_message)
            }
            Message::Events(events_message) => {
                update::handle_events_message(&mut self.update_context(), events_message)
            }
            Message::Tour(tour_message) => {
                update::handle_tour_message(&mut self.update_context(), tour_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut self.update_context(), navbar_message)
            }
            Message::Window { id, event } => {
                update::handle_window_event(&mut self.update_context(), id, event)
            }
            Message::WindowModeChanged(mode) => {
                update::handle_window_mode(&mut self.update_context(), mode)
            }
            Message::GoHome => update::navigate(&mut self.update_context(), Route::Home),
            Message::DismissWarning => {
                self.config_warning = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            viewer: self.viewer.as_ref(),
            events: &self.events,
            language_menu_open: self.language_menu_open,
            config_warning: self.config_warning.as_deref(),
        })
    }

    // ------------------------------------------------------------------
    // Read-only accessors, used by tests
    // ------------------------------------------------------------------

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn current_route(&self) -> &Route {
        self.history.current()
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&component::State> {
        self.viewer.as_ref()
    }

    #[must_use]
    pub fn events(&self) -> &events::State {
        &self.events
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::FetchFuture;
    use crate::diagnostics::{DiagnosticEventKind, UserAction};
    use crate::domain::{EquirectImage, Event, Language, Place, PlaceId, Text};
    use crate::error::FetchError;
    use crate::ui::{navbar, tour};
    use futures_util::future::{ready, FutureExt};

    struct MockProvider;

    impl PlaceProvider for MockProvider {
        fn fetch_place(&self, id: &PlaceId) -> FetchFuture<Place> {
            ready(Ok(Place {
                id: id.clone(),
                name: Text::from("Mihrab"),
                image: "mihrab.jpg".to_string(),
                description: None,
            }))
            .boxed()
        }

        fn fetch_events(&self) -> FetchFuture<Vec<Event>> {
            ready(Ok(Vec::new())).boxed()
        }

        fn fetch_image(&self, _url: &str) -> FetchFuture<EquirectImage> {
            ready(Err(FetchError::Image("not in tests".into()))).boxed()
        }

        fn api_base(&self) -> &str {
            "http://localhost:8000"
        }
    }

    fn startup(initial_route: Option<&str>) -> Startup {
        Startup {
            flags: Flags {
                lang: Some("fr".to_string()),
                initial_route: initial_route.map(str::to_string),
                ..Flags::default()
            },
            config: Config::default(),
            config_warning: None,
            provider: Arc::new(MockProvider),
        }
    }

    fn app(initial_route: Option<&str>) -> App {
        let (app, _task) = App::new(startup(initial_route));
        app
    }

    fn with_window(app: &mut App) {
        let _ = app.update(Message::Window {
            id: window::Id::unique(),
            event: window::Event::Resized(Size::new(800.0, 600.0)),
        });
    }

    #[test]
    fn starts_on_tour_listing() {
        let app = app(None);
        assert_eq!(app.screen(), Screen::Tour);
        assert_eq!(app.current_route(), &Route::Home);
        assert!(app.viewer().is_none());
    }

    #[test]
    fn unknown_initial_path_shows_not_found_until_home() {
        let mut app = app(Some("/nowhere/at/all"));
        assert_eq!(app.screen(), Screen::NotFound);

        let _ = app.update(Message::GoHome);
        assert_eq!(app.screen(), Screen::Tour);
    }

    #[test]
    fn missing_catalogue_entry_is_not_found() {
        let app = app(Some("/virtual-tour/architecture/99"));
        assert_eq!(app.screen(), Screen::NotFound);
        assert!(app.viewer().is_none());
    }

    #[test]
    fn catalogue_entry_opens_viewer_ready() {
        let app = app(Some("/virtual-tour/architecture/1"));
        assert_eq!(app.screen(), Screen::Viewer);
        let viewer = app.viewer().expect("viewer open");
        assert!(viewer.phase().loaded_place().is_some());
        assert!(app.title().starts_with(
            viewer
                .title(Language::French)
                .expect("place title")
        ));
    }

    #[test]
    fn tour_card_opens_viewer_and_back_returns() {
        let mut app = app(None);
        let _ = app.update(Message::Tour(tour::Message::OpenPlace {
            category: "architecture",
            place_id: "42",
        }));
        assert_eq!(app.screen(), Screen::Viewer);
        assert!(app.viewer().is_some_and(|viewer| viewer.phase().is_loading()));

        let _ = app.update(Message::Viewer(component::Message::Back));
        assert_eq!(app.screen(), Screen::Tour);
        assert!(app.viewer().is_none());
        assert!(matches!(
            app.diagnostics().last_kind(),
            Some(DiagnosticEventKind::UserAction {
                action: UserAction::NavigateBack,
                ..
            })
        ));
    }

    #[test]
    fn close_from_initial_viewer_goes_to_listing() {
        let mut app = app(Some("/lieu/architecture/42"));
        assert_eq!(app.screen(), Screen::Viewer);

        let _ = app.update(Message::Viewer(component::Message::Close));
        assert_eq!(app.screen(), Screen::Tour);
    }

    #[test]
    fn navbar_opens_events_and_starts_fetch() {
        let mut app = app(None);
        let _ = app.update(Message::Navbar(navbar::Message::OpenEvents));
        assert_eq!(app.screen(), Screen::Events);
        assert!(matches!(app.events().phase(), events::Phase::Loading));
    }

    #[test]
    fn leaving_events_discards_pending_response() {
        let mut app = app(None);
        let _ = app.update(Message::Navbar(navbar::Message::OpenEvents));
        let generation = app.events().generation();
        let _ = app.update(Message::Navbar(navbar::Message::OpenTour));

        let _ = app.update(Message::Events(events::Message::Loaded {
            generation,
            resource: "http://api.test/evenements".to_string(),
            result: Ok(Vec::new()),
        }));
        assert!(matches!(app.events().phase(), events::Phase::Idle));
    }

    #[test]
    fn language_selection_switches_bundle() {
        let mut app = app(None);
        let _ = app.update(Message::Navbar(navbar::Message::SelectLanguage(
            Language::Arabic,
        )));
        assert_eq!(app.i18n.current_language(), Language::Arabic);
        assert!(app.i18n.is_rtl());
    }

    #[test]
    fn fullscreen_needs_a_known_window() {
        let mut app = app(Some("/lieu/architecture/42"));
        let _ = app.update(Message::Viewer(component::Message::ToggleFullscreen));
        assert!(!app.is_fullscreen());
    }

    fn report_mode(app: &mut App, mode: window::Mode) {
        let _ = app.update(Message::WindowModeChanged(mode));
    }

    #[test]
    fn fullscreen_toggles_twice_back_to_windowed() {
        let mut app = app(Some("/lieu/architecture/42"));
        with_window(&mut app);

        let _ = app.update(Message::Viewer(component::Message::ToggleFullscreen));
        assert!(!app.is_fullscreen());
        report_mode(&mut app, window::Mode::Fullscreen);
        assert!(app.is_fullscreen());
        assert!(app.viewer().is_some_and(component::State::is_fullscreen));

        let _ = app.update(Message::Viewer(component::Message::ToggleFullscreen));
        report_mode(&mut app, window::Mode::Windowed);
        assert!(!app.is_fullscreen());
        assert!(app.viewer().is_some_and(|viewer| !viewer.is_fullscreen()));
    }

    #[test]
    fn refused_fullscreen_leaves_flag_windowed() {
        let mut app = app(Some("/lieu/architecture/42"));
        with_window(&mut app);

        let _ = app.update(Message::Viewer(component::Message::ToggleFullscreen));
        report_mode(&mut app, window::Mode::Windowed);
        assert!(!app.is_fullscreen());
        assert!(app.viewer().is_some_and(|viewer| !viewer.is_fullscreen()));
    }

    #[test]
    fn fullscreen_left_outside_the_app_clears_flag() {
        let mut app = app(Some("/lieu/architecture/42"));
        with_window(&mut app);
        let _ = app.update(Message::Viewer(component::Message::ToggleFullscreen));
        report_mode(&mut app, window::Mode::Fullscreen);
        assert!(app.is_fullscreen());

        // The window manager restores the window, which resizes it
        with_window(&mut app);
        report_mode(&mut app, window::Mode::Windowed);
        assert!(!app.is_fullscreen());
        assert!(app.viewer().is_some_and(|viewer| !viewer.is_fullscreen()));
    }

    #[test]
    fn leaving_viewer_exits_fullscreen() {
        let mut app = app(Some("/lieu/architecture/42"));
        with_window(&mut app);
        let _ = app.update(Message::Viewer(component::Message::ToggleFullscreen));
        report_mode(&mut app, window::Mode::Fullscreen);
        assert!(app.is_fullscreen());

        let _ = app.update(Message::Viewer(component::Message::Back));
        assert!(app.viewer().is_none());
        report_mode(&mut app, window::Mode::Windowed);
        assert!(!app.is_fullscreen());
    }

    #[test]
    fn config_warning_can_be_dismissed() {
        let mut startup = startup(None);
        startup.config_warning = Some("notification-config-load-error".to_string());
        let (mut app, _) = App::new(startup);
        assert!(app.config_warning.is_some());

        let _ = app.update(Message::DismissWarning);
        assert!(app.config_warning.is_none());
    }
}
