// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[window]` - Startup window size
//! - `[network]` - Remote image fetching behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `VVS_PORTFOLIO_CONFIG_DIR` environment variable or pass
//!    `--config-dir` on the command line
//! 3. Falls back to the platform-specific config directory
//!
//! A broken or unreadable file never aborts startup: `load()` falls back to
//! defaults and reports a notification key for the caller to surface.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Startup window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(
        default = "default_window_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,

    #[serde(
        default = "default_window_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Remote image fetching settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkConfig {
    /// Whether cover and gallery images are fetched from their remote URLs.
    /// When disabled every tile renders the built-in placeholder.
    #[serde(
        default = "default_remote_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub remote_images: Option<bool>,

    /// Timeout for a single image request, in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            remote_images: default_remote_images(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// User preferences persisted in `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Loads the configuration from the resolved config directory.
///
/// Returns the configuration plus an optional notification key when the file
/// exists but could not be read or parsed. A missing file is not a warning.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(dir) = paths::get_app_config_dir() else {
        return (Config::default(), None);
    };

    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (Config::default(), Some("notification-config-load-error")),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_enables_remote_images() {
        let config = Config::default();
        assert_eq!(config.network.remote_images, Some(true));
        assert_eq!(
            config.network.request_timeout_secs,
            Some(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.network.remote_images = Some(false);
        config.window.width = Some(1024);

        save_to_path(&config, &path).expect("save config");
        let loaded = load_from_path(&path).expect("load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.window.width, default_window_width());
        assert_eq!(loaded.network.remote_images, default_remote_images());
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "this is not toml = = =").expect("write config");

        assert!(load_from_path(&path).is_err());
    }
}
