// SPDX-License-Identifier: MPL-2.0
use feline_fascination::app::session_settings;
use feline_fascination::config::{self, LOAD_WARNING};
use feline_fascination::session::ThemeFlag;
use feline_fascination::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn settings_file_drives_session_tunables() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "Dark"

[ticker]
interval_ms = 3000

[trail]
capacity = 12
fade_ms = 400

[audio]
volume = 0.8
"#,
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);

    let settings = session_settings(&config, config.general.theme_mode.initial_flag());
    assert_eq!(settings.theme, ThemeFlag::Dark);
    assert_eq!(settings.ticker_interval.millis(), 3000);
    assert_eq!(settings.trail_capacity.value(), 12);
    assert_eq!(settings.trail_fade.millis(), 400);
    assert_eq!(settings.volume.percent(), 80);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn broken_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[trail\ncapacity = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
    assert_eq!(config, config::Config::default());
}

#[test]
fn missing_settings_file_is_silent() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().join("nowhere")));
    assert!(warning.is_none());
    assert_eq!(config, config::Config::default());
}
