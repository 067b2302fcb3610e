// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[ticker]` - Fact rotation interval
//! - `[trail]` - Pointer trail capacity and fade
//! - `[audio]` - Initial playback volume
//! - `[feedback]` - Like burst shape
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument or `FELINE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The file is read-only from the application's point of view: session
//! state is never written back.
//!
//! # Examples
//!
//! ```no_run
//! use feline_fascination::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("ticker interval: {:?}", config.ticker.interval_ms);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::{BurstShape, FadeDuration, TickerInterval, TrailCapacity, Volume};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning surfaced when `settings.toml` exists but cannot be used.
pub const LOAD_WARNING: &str = "Settings file is invalid, defaults are used";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Fact ticker settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerConfig {
    /// Delay between two facts, in milliseconds.
    #[serde(default = "default_interval_ms", skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Pointer trail settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrailConfig {
    /// Number of samples kept. Zero disables the trail.
    #[serde(default = "default_capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Visual lifetime of one dot, in milliseconds.
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            fade_ms: default_fade_ms(),
        }
    }
}

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AudioConfig {
    /// Initial playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}

/// Like feedback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackConfig {
    /// Confetti particles per like.
    #[serde(
        default = "default_particle_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub particle_count: Option<u32>,

    /// Cone angle of the burst, in degrees.
    #[serde(default = "default_spread", skip_serializing_if = "Option::is_none")]
    pub spread: Option<f32>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            particle_count: default_particle_count(),
            spread: default_spread(),
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
    pub ticker: TickerConfig,

    #[serde(default)]
    pub trail: TrailConfig,

    #[serde(default)]
    pub audio: AudioConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

impl Config {
    /// Rotation interval, clamped to the supported range.
    #[must_use]
    pub fn ticker_interval(&self) -> TickerInterval {
        self.ticker
            .interval_ms
            .map_or_else(TickerInterval::default, TickerInterval::from_millis)
    }

    /// Trail capacity, clamped to the supported range.
    #[must_use]
    pub fn trail_capacity(&self) -> TrailCapacity {
        self.trail
            .capacity
            .map_or_else(TrailCapacity::default, TrailCapacity::new)
    }

    /// Trail fade duration, clamped to the supported range.
    #[must_use]
    pub fn trail_fade(&self) -> FadeDuration {
        self.trail
            .fade_ms
            .map_or_else(FadeDuration::default, FadeDuration::from_millis)
    }

    /// Initial volume, clamped into [0, 1].
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.audio.volume.map_or_else(Volume::default, Volume::new)
    }

    /// Burst shape, clamped to the supported range.
    #[must_use]
    pub fn burst(&self) -> BurstShape {
        BurstShape::new(
            self.feedback
                .particle_count
                .unwrap_or(DEFAULT_PARTICLE_COUNT),
            self.feedback.spread.unwrap_or(DEFAULT_BURST_SPREAD_DEG),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICKER_INTERVAL_MS)
}

fn default_capacity() -> Option<usize> {
    Some(DEFAULT_TRAIL_CAPACITY)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_TRAIL_FADE_MS)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_particle_count() -> Option<u32> {
    Some(DEFAULT_PARTICLE_COUNT)
}

fn default_spread() -> Option<f32> {
    Some(DEFAULT_BURST_SPREAD_DEG)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {raw}")))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a user-facing warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "invalid configuration, using defaults");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
