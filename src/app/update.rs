// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every navigation goes through [`navigate`] or [`navigate_back`], which
//! update the route history and then rebuild the screen from the current
//! route in [`open_current`].

use super::{Message, Screen};
use crate::application::port::{PlaceProvider, ViewportController};
use crate::application::query::RouteHistory;
use crate::catalogue;
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::domain::Route;
use crate::i18n::fluent::I18n;
use crate::panorama::OrbitCamera;
use crate::ui::events::{self, Effect as EventsEffect};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::tour::{self, Event as TourEvent};
use crate::ui::viewer::component::{self, Effect as ViewerEffect};
use iced::{window, Size, Task};
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub history: &'a mut RouteHistory,
    pub provider: &'a Arc<dyn PlaceProvider>,
    pub viewer: &'a mut Option<component::State>,
    pub events: &'a mut events::State,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub window_size: &'a mut Option<Size>,
    pub language_menu_open: &'a mut bool,
    pub sphere_yaw: f32,
}

// ----------------------------------------------------------------------
// Navigation
// ----------------------------------------------------------------------

/// Opens a path typed on the command line. Unknown paths show the
/// "page not found" screen without touching the history.
pub fn open_path(ctx: &mut UpdateContext<'_>, path: &str) -> Task<Message> {
    match Route::parse(path) {
        Some(route) => navigate(ctx, route),
        None => {
            ctx.diagnostics
                .log_warning(format!("no route matches {path:?}"));
            show_not_found(ctx)
        }
    }
}

/// Pushes `route` and shows it.
pub fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    let changed = ctx.history.navigate(route);
    if !changed && *ctx.screen != Screen::NotFound {
        return Task::none();
    }
    ctx.diagnostics.log_action(UserAction::Navigate {
        route: ctx.history.current().path(),
    });
    open_current(ctx)
}

/// Returns to the previous route.
pub fn navigate_back(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::NavigateBack);
    let changed = ctx.history.back();
    if changed || *ctx.screen == Screen::NotFound {
        open_current(ctx)
    } else {
        Task::none()
    }
}

/// Rebuilds the screen for the current route.
fn open_current(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let route = ctx.history.current().clone();
    let target = Screen::for_route(&route);
    let previous = *ctx.screen;

    let mut tasks = Vec::new();
    if previous == Screen::Viewer && target != Screen::Viewer {
        tasks.push(set_fullscreen(ctx, false));
        *ctx.viewer = None;
    }
    if previous == Screen::Events && target != Screen::Events {
        ctx.events.cancel();
    }

    let task = match route {
        Route::Home | Route::VirtualTour => {
            *ctx.screen = Screen::Tour;
            Task::none()
        }
        Route::Events => {
            *ctx.screen = Screen::Events;
            ctx.events
                .load(ctx.provider, ctx.diagnostics)
                .map(Message::Events)
        }
        Route::Place { place_id, .. } => {
            *ctx.screen = Screen::Viewer;
            ensure_viewer(ctx.viewer, ctx.provider, ctx.sphere_yaw, *ctx.window_size)
                .open_place(&place_id, ctx.diagnostics)
                .map(Message::Viewer)
        }
        Route::TourEntry { category, index } => match catalogue::entry(&category, index) {
            Some(entry) => {
                *ctx.screen = Screen::Viewer;
                ensure_viewer(ctx.viewer, ctx.provider, ctx.sphere_yaw, *ctx.window_size)
                    .open_static(entry.to_place(), ctx.diagnostics)
                    .map(Message::Viewer)
            }
            None => {
                ctx.diagnostics
                    .log_warning(format!("no catalogue entry {category}/{index}"));
                tasks.push(show_not_found(ctx));
                Task::none()
            }
        },
    };
    tasks.push(task);

    Task::batch(tasks)
}

fn show_not_found(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let task = set_fullscreen(ctx, false);
    *ctx.viewer = None;
    ctx.events.cancel();
    *ctx.screen = Screen::NotFound;
    task
}

/// Returns the open viewer, creating one sized to the window if needed.
fn ensure_viewer<'v>(
    viewer: &'v mut Option<component::State>,
    provider: &Arc<dyn PlaceProvider>,
    sphere_yaw: f32,
    window_size: Option<Size>,
) -> &'v mut component::State {
    viewer.get_or_insert_with(|| {
        let camera: Box<dyn ViewportController> = Box::new(OrbitCamera::new());
        let mut viewer = component::State::new(Arc::clone(provider), camera, sphere_yaw);
        if let Some(size) = window_size {
            viewer.set_viewport_size(size);
        }
        viewer
    })
}

// ----------------------------------------------------------------------
// Fullscreen
// ----------------------------------------------------------------------

/// Requests `desired` and asks the platform which mode it ended up in.
/// The flag only changes when that answer arrives.
fn update_fullscreen_mode(
    fullscreen: bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode).chain(query_mode(*window_id))
}

fn query_mode(window_id: window::Id) -> Task<Message> {
    window::mode(window_id).map(Message::WindowModeChanged)
}

fn set_fullscreen(ctx: &mut UpdateContext<'_>, desired: bool) -> Task<Message> {
    update_fullscreen_mode(*ctx.fullscreen, ctx.window_id.as_ref(), desired)
}

/// Adopts the mode the platform reports and tells the viewer about it.
pub fn handle_window_mode(ctx: &mut UpdateContext<'_>, mode: window::Mode) -> Task<Message> {
    *ctx.fullscreen = mode == window::Mode::Fullscreen;
    if let Some(viewer) = ctx.viewer.as_mut() {
        let _ = viewer.handle_message(
            component::Message::FullscreenChanged(*ctx.fullscreen),
            ctx.diagnostics,
        );
    }
    Task::none()
}

// ----------------------------------------------------------------------
// Component handlers
// ----------------------------------------------------------------------

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: component::Message,
) -> Task<Message> {
    if let component::Message::RawEvent { window, .. } = &message {
        *ctx.window_id = Some(*window);
    }

    // Late responses for a viewer that was closed
    let Some(viewer) = ctx.viewer.as_mut() else {
        return Task::none();
    };

    let (effect, task) = viewer.handle_message(message, ctx.diagnostics);
    let task = task.map(Message::Viewer);

    let follow_up = match effect {
        ViewerEffect::None => Task::none(),
        ViewerEffect::NavigateBack => navigate_back(ctx),
        ViewerEffect::ToggleFullscreen => {
            let desired = !*ctx.fullscreen;
            set_fullscreen(ctx, desired)
        }
        ViewerEffect::ExitFullscreen => set_fullscreen(ctx, false),
    };

    Task::batch([task, follow_up])
}

pub fn handle_events_message(
    ctx: &mut UpdateContext<'_>,
    message: events::Message,
) -> Task<Message> {
    let (effect, task) = ctx.events.handle_message(message, ctx.diagnostics);
    let task = task.map(Message::Events);

    match effect {
        EventsEffect::None => task,
        EventsEffect::NavigateBack => Task::batch([task, navigate_back(ctx)]),
    }
}

pub fn handle_tour_message(ctx: &mut UpdateContext<'_>, message: tour::Message) -> Task<Message> {
    match tour::update(message) {
        TourEvent::Navigate(route) => navigate(ctx, route),
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.language_menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(route) => navigate(ctx, route),
        NavbarEvent::LanguageSelected(language) => {
            ctx.i18n.set_language(language);
            ctx.diagnostics.log_action(UserAction::ChangeLanguage {
                language: language.code().to_string(),
            });
            Task::none()
        }
    }
}

/// Tracks the window so fullscreen requests and the viewer's viewport
/// follow it. A resize may come from the window manager leaving
/// fullscreen, so the mode is queried again.
pub fn handle_window_event(
    ctx: &mut UpdateContext<'_>,
    id: window::Id,
    event: window::Event,
) -> Task<Message> {
    *ctx.window_id = Some(id);

    let size = match event {
        window::Event::Opened { size, .. } | window::Event::Resized(size) => size,
        _ => return Task::none(),
    };
    *ctx.window_size = Some(size);
    if let Some(viewer) = ctx.viewer.as_mut() {
        viewer.set_viewport_size(size);
    }
    query_mode(id)
}
