// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles routing of native events (keyboard, mouse, window)
//! to the appropriate screen components based on the current application state.

use super::{Message, Screen};
use crate::ui::events;
use crate::ui::viewer::component;
use iced::{event, keyboard, mouse, window, Subscription};

/// Creates the appropriate event subscription based on the current screen.
///
/// Window open/resize events are tracked on every screen. The viewer also
/// receives pointer and keyboard input; presses and wheel turns that a
/// widget (an overlay button) already captured are not forwarded.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, status, window_id| {
            window_message(&event, window_id).or_else(|| viewer_message(event, status, window_id))
        }),
        Screen::Tour | Screen::Events | Screen::NotFound => {
            event::listen_with(|event, _status, window_id| window_message(&event, window_id))
        }
    }
}

fn window_message(event: &event::Event, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window_event @ (window::Event::Opened { .. } | window::Event::Resized(_))) => {
            Some(Message::Window {
                id: window_id,
                event: window_event.clone(),
            })
        }
        _ => None,
    }
}

fn viewer_message(
    event: event::Event,
    status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    let uncaptured = matches!(status, event::Status::Ignored);

    let forward = match &event {
        event::Event::Mouse(
            mouse::Event::WheelScrolled { .. } | mouse::Event::ButtonPressed(mouse::Button::Left),
        ) => uncaptured,
        // Drags must end even when released over a button
        event::Event::Mouse(
            mouse::Event::CursorMoved { .. }
            | mouse::Event::CursorLeft
            | mouse::Event::ButtonReleased(mouse::Button::Left),
        ) => true,
        event::Event::Keyboard(keyboard::Event::KeyPressed { .. }) => uncaptured,
        _ => false,
    };

    forward.then(|| {
        Message::Viewer(component::Message::RawEvent {
            window: window_id,
            event,
        })
    })
}

/// Spinner animation while something is loading on the visible screen.
pub fn create_animation_subscription(
    screen: Screen,
    viewer: Option<&component::State>,
    events: &events::State,
) -> Subscription<Message> {
    match screen {
        Screen::Viewer => viewer
            .map(|viewer| viewer.subscription().map(Message::Viewer))
            .unwrap_or_else(Subscription::none),
        Screen::Events => events.subscription().map(Message::Events),
        Screen::Tour | Screen::NotFound => Subscription::none(),
    }
}
