// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the zoom widget settings from a `settings.toml` file.
//!
//! Only the widget *settings* (step, bounds, initial zoom) are configurable.
//! The view state itself (zoom, offset, rotation) is never persisted.
//!
//! ```toml
//! [zoom]
//! step = 0.2
//! min = 0.125
//! max = 1024.0
//! initial = 1.0
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use img_zoom::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let settings = config.zoom_settings().unwrap_or_default();
//! assert!(settings.min() <= settings.initial());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::state::ZoomSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Zoom behavior settings. Missing keys fall back to [`defaults`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    /// Fractional zoom increment per step.
    #[serde(default = "default_step", skip_serializing_if = "Option::is_none")]
    pub step: Option<f32>,

    /// Minimum zoom factor.
    #[serde(default = "default_min", skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,

    /// Maximum zoom factor.
    #[serde(default = "default_max", skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,

    /// Zoom factor applied by a reset.
    #[serde(default = "default_initial", skip_serializing_if = "Option::is_none")]
    pub initial: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            min: default_min(),
            max: default_max(),
            initial: default_initial(),
        }
    }
}

/// Overrides supplied on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomOverrides {
    pub step: Option<f32>,
    pub min: Option<f32>,
    pub max: Option<f32>,
    pub initial: Option<f32>,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub zoom: ZoomConfig,
}

impl Config {
    /// Applies command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ZoomOverrides) -> Self {
        self.zoom.step = overrides.step.or(self.zoom.step);
        self.zoom.min = overrides.min.or(self.zoom.min);
        self.zoom.max = overrides.max.or(self.zoom.max);
        self.zoom.initial = overrides.initial.or(self.zoom.initial);
        self
    }

    /// Builds validated widget settings from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSettings`] when the configured values break
    /// `0 < min <= initial <= max` or `step > 0`.
    pub fn zoom_settings(&self) -> Result<ZoomSettings> {
        ZoomSettings::new(
            self.zoom.step.unwrap_or(DEFAULT_ZOOM_STEP),
            self.zoom.min.unwrap_or(DEFAULT_MIN_ZOOM),
            self.zoom.max.unwrap_or(DEFAULT_MAX_ZOOM),
            self.zoom.initial.unwrap_or(DEFAULT_INITIAL_ZOOM),
        )
    }
}

#[allow(clippy::unnecessary_wraps)]
fn default_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

#[allow(clippy::unnecessary_wraps)]
fn default_min() -> Option<f32> {
    Some(DEFAULT_MIN_ZOOM)
}

#[allow(clippy::unnecessary_wraps)]
fn default_max() -> Option<f32> {
    Some(DEFAULT_MAX_ZOOM)
}

#[allow(clippy::unnecessary_wraps)]
fn default_initial() -> Option<f32> {
    Some(DEFAULT_INITIAL_ZOOM)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "failed to load {}: {err}; using defaults",
                            path.display()
                        )),
                    );
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
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// See [`save_to_path`].
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures and [`Error::Config`] if
/// serialization fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            zoom: ZoomConfig {
                step: Some(0.5),
                min: Some(0.25),
                max: Some(16.0),
                initial: Some(2.0),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_keys_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[zoom]\nstep = 0.5\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.zoom.step, Some(0.5));
        assert_eq!(loaded.zoom.min, Some(DEFAULT_MIN_ZOOM));
        assert_eq!(loaded.zoom.max, Some(DEFAULT_MAX_ZOOM));
        assert_eq!(loaded.zoom.initial, Some(DEFAULT_INITIAL_ZOOM));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[zoom\nstep = ")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let config = Config::default().with_overrides(ZoomOverrides {
            step: Some(0.1),
            max: Some(8.0),
            ..ZoomOverrides::default()
        });
        assert_eq!(config.zoom.step, Some(0.1));
        assert_eq!(config.zoom.max, Some(8.0));
        assert_eq!(config.zoom.min, Some(DEFAULT_MIN_ZOOM));
    }

    #[test]
    fn zoom_settings_rejects_initial_outside_bounds() {
        let config = Config {
            zoom: ZoomConfig {
                initial: Some(4096.0),
                ..ZoomConfig::default()
            },
        };
        assert!(matches!(
            config.zoom_settings(),
            Err(Error::InvalidSettings(
                SettingsError::InitialOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn default_config_builds_default_settings() {
        let settings = Config::default()
            .zoom_settings()
            .expect("defaults must be valid");
        assert_eq!(settings, ZoomSettings::default());
    }
}
