// SPDX-License-Identifier: MPL-2.0
//! This module handles the page's persisted preferences, stored in a small
//! `settings.toml` file.
//!
//! Only one value is persisted: the display language, under the fixed key
//! [`defaults::LANGUAGE_PREFERENCE_KEY`].
//!
//! # Examples
//!
//! ```no_run
//! use stockpro_ui::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("en".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Stored language code. Validated by the localizer, not here.
    #[serde(rename = "stockpro_lang", default)]
    pub language: Option<String>,
}

/// Returns the settings file location, honoring directory overrides.
pub fn default_config_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. A file that is not valid TOML yields the default
/// configuration rather than an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            language: Some("en".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn language_is_stored_under_fixed_key() {
        let config = Config {
            language: Some("id".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let raw = fs::read_to_string(&config_path).expect("failed to read settings");

        assert!(raw.contains(defaults::LANGUAGE_PREFERENCE_KEY));
        assert!(raw.contains("\"id\""));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
