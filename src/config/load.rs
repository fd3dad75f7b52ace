//! The main config loading module for dirpeek.
//!
//! Handles loading and deserializing settings from `dirpeek.toml`.
//!
//! Provides the main [Config] struct, as well as the [RawConfig] used for parsing.
//! A missing or broken file is never fatal: dirpeek falls back to its internal defaults.

use crate::config::{Display, General, InternalPreview, Preview};
use crate::core::{Formatter, PreviewOptions};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct, which clamps out of range values.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    preview: Preview,
}

/// Main configuration struct for dirpeek
/// This struct holds the processed configuration options.
#[derive(Debug, Clone)]
pub struct Config {
    general: General,
    display: Display,
    preview: InternalPreview,
}

/// Conversion from RawConfig to Config
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            preview: InternalPreview::from(raw.preview),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, with the same fallbacks as [Config::load].
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "error parsing config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "error reading config, using defaults");
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn preview_options(&self) -> &PreviewOptions {
        self.preview.options()
    }

    /// Builds the listing [Formatter] from the general and display settings.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.general.show_hidden(), self.display.human_sizes())
    }

    /// Determine the default configuration file path.
    /// Checks the DIRPEEK_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/dirpeek/dirpeek.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("DIRPEEK_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("dirpeek/dirpeek.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/dirpeek/dirpeek.toml");
        }
        PathBuf::from("dirpeek.toml")
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}
