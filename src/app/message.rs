// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::events;
use crate::ui::navbar;
use crate::ui::tour;
use crate::ui::viewer::component;
use iced::window;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Events(events::Message),
    Tour(tour::Message),
    Navbar(navbar::Message),
    /// The window opened or was resized.
    Window {
        id: window::Id,
        event: window::Event,
    },
    /// Mode the platform reports for the window.
    WindowModeChanged(window::Mode),
    /// Leave the "page not found" screen.
    GoHome,
    DismissWarning,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`, `ar`, `wo`, `en`).
    pub lang: Option<String>,
    /// Optional API base URL.
    /// Takes precedence over `PANOTOUR_API_BASE_URL` and the config file.
    pub api_base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PANOTOUR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional path to open on startup, e.g. `/lieu/architecture/42`.
    pub initial_route: Option<String>,
}
