// SPDX-License-Identifier: MPL-2.0
use panotour::config::{self, Config, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use panotour::domain::Language;
use panotour::i18n::fluent::I18n;
use panotour::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"ar\"\n").expect("write config");
    let arabic = config::load_from_path(&path).expect("load arabic config");
    let i18n = I18n::new(None, None, &arabic);
    assert_eq!(i18n.current_language(), Language::Arabic);
    assert!(i18n.is_rtl());

    fs::write(&path, "[general]\nlanguage = \"wo\"\n").expect("write config");
    let wolof = config::load_from_path(&path).expect("load wolof config");
    let i18n = I18n::new(None, None, &wolof);
    assert_eq!(i18n.current_language(), Language::Wolof);
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: config::GeneralConfig {
            language: Some("ar".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let i18n = I18n::new(Some("en".to_string()), None, &config);
    assert_eq!(i18n.current_language(), Language::English);
}

#[test]
fn test_full_config_file_is_parsed() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[general]
language = "fr"
theme_mode = "dark"

[api]
base_url = "https://tour.example.org/api"
timeout_secs = 30

[viewer]
initial_yaw = 1.5
"#,
    )
    .expect("write config");

    let config = config::load_from_path(&path).expect("load config");
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.api.base_url.as_deref(), Some("https://tour.example.org/api"));
    assert_eq!(config.api.timeout(), Duration::from_secs(30));
    assert_eq!(config.viewer.initial_yaw, Some(1.5));
}

#[test]
fn test_missing_config_gives_defaults_without_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
    assert_eq!(
        config.api.timeout(),
        Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    );
}

#[test]
fn test_broken_config_gives_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn test_cli_api_base_wins_and_is_trimmed() {
    let config = Config::default();
    assert_eq!(
        config::resolve_api_base_url(Some("http://10.0.0.2:8000/".to_string()), &config),
        "http://10.0.0.2:8000"
    );
    assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
}

#[test]
fn test_key_only_in_french_falls_back_for_every_language() {
    let i18n = I18n::new(Some("fr".to_string()), None, &Config::default());
    let french = i18n.tr_in(Language::French, "contact-email");
    assert_ne!(french, "contact-email");

    for language in Language::ALL {
        assert_eq!(i18n.tr_in(language, "contact-email"), french);
    }
}

#[test]
fn test_absent_key_returns_key() {
    let i18n = I18n::new(Some("ar".to_string()), None, &Config::default());
    for language in Language::ALL {
        assert_eq!(i18n.tr_in(language, "no-such-message"), "no-such-message");
    }
}

#[test]
fn test_external_translations_override_embedded() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("en.ftl"), "window-title = Custom Title\n").expect("write ftl");

    let i18n = I18n::new(
        Some("en".to_string()),
        Some(dir.path().to_string_lossy().into_owned()),
        &Config::default(),
    );
    assert_eq!(i18n.tr("window-title"), "Custom Title");
    // Other English messages are still there
    assert_ne!(i18n.tr("nav-events"), "nav-events");
}

#[test]
fn test_every_bundle_is_loaded() {
    let i18n = I18n::new(None, None, &Config::default());
    assert_eq!(i18n.available_languages(), Language::ALL.to_vec());
}
