// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[api]` - Backend base URL and request timeout
//! - `[viewer]` - Panorama viewer settings
//!
//! The file is only read; the application never writes it back.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `PANOTOUR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use panotour::config;
//!
//! let (config, _warning) = config::load();
//! let base = config::resolve_api_base_url(None, &config);
//! println!("talking to {base}");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the API base URL.
pub const ENV_API_BASE_URL: &str = "PANOTOUR_API_BASE_URL";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (`fr`, `ar`, `wo` or `en`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the tour backend (no trailing slash required).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Panorama viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Yaw rotation of the panorama sphere in radians.
    #[serde(
        default = "default_initial_yaw",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_yaw: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_yaw: default_initial_yaw(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_initial_yaw() -> Option<f32> {
    Some(DEFAULT_INITIAL_YAW)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Resolution helpers
// =============================================================================

/// Resolves the API base URL.
///
/// Priority: CLI argument, then `PANOTOUR_API_BASE_URL`, then `[api] base_url`,
/// then [`DEFAULT_API_BASE_URL`]. Empty values are skipped and a trailing
/// slash is removed.
pub fn resolve_api_base_url(cli_value: Option<String>, config: &Config) -> String {
    let env_value = std::env::var(ENV_API_BASE_URL).ok();
    [cli_value, env_value, config.api.base_url.clone()]
        .into_iter()
        .flatten()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[general]
language = "ar"
theme_mode = "light"

[api]
base_url = "https://tour.example.org"
timeout_secs = 5

[viewer]
initial_yaw = 1.5
"#,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("ar"));
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://tour.example.org")
        );
        assert_eq!(config.api.timeout(), Duration::from_secs(5));
        assert_eq!(config.viewer.initial_yaw, Some(1.5));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"wo\"\n").expect("parse");
        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.viewer.initial_yaw, Some(DEFAULT_INITIAL_YAW));
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn timeout_is_clamped() {
        let api = ApiConfig {
            base_url: None,
            timeout_secs: Some(0),
        };
        assert_eq!(api.timeout(), Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS));

        let api = ApiConfig {
            base_url: None,
            timeout_secs: Some(10_000),
        };
        assert_eq!(api.timeout(), Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn api_base_resolution_order() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_API_BASE_URL);

        let mut config = Config::default();
        assert_eq!(resolve_api_base_url(None, &config), DEFAULT_API_BASE_URL);

        config.api.base_url = Some("https://config.example/".into());
        assert_eq!(resolve_api_base_url(None, &config), "https://config.example");

        std::env::set_var(ENV_API_BASE_URL, "https://env.example");
        assert_eq!(resolve_api_base_url(None, &config), "https://env.example");

        assert_eq!(
            resolve_api_base_url(Some("https://cli.example".into()), &config),
            "https://cli.example"
        );

        std::env::remove_var(ENV_API_BASE_URL);
    }

    #[test]
    fn empty_cli_value_is_skipped() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_API_BASE_URL);

        let config = Config::default();
        assert_eq!(
            resolve_api_base_url(Some("  ".into()), &config),
            DEFAULT_API_BASE_URL
        );
    }
}
