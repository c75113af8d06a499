//! # Configuration Persistence
//!
//! Save and load client settings to/from disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable overriding [`Config::api_url`].
pub const API_URL_ENV: &str = "QUICKSTORE_API_URL";

const APP_DIR: &str = "quickstore";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Origin of the QuickStore REST backend.
    pub api_url: String,

    /// Where the session file lives. Defaults to the platform config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: None,
        }
    }
}

impl Config {
    /// Returns the config file path.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.json"))
    }

    /// Loads configuration from the default location and applies the
    /// `QUICKSTORE_API_URL` override.
    #[must_use]
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("Could not determine config directory");
                Self::default()
            }
        };
        config.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Loads configuration from `path`, or returns defaults if it is missing
    /// or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Replaces the API URL when `value` is a non-blank string.
    #[must_use]
    pub fn with_api_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            tracing::debug!(%url, "API URL overridden");
            self.api_url = url;
        }
        self
    }

    /// Path of the durable session file.
    #[must_use]
    pub fn session_path(&self) -> Option<PathBuf> {
        self.session_file
            .clone()
            .or_else(|| dirs::config_dir().map(|p| p.join(APP_DIR).join("session.json")))
    }

    /// Saves configuration to the default location.
    ///
    /// # Errors
    ///
    /// Fails if no config directory exists on this platform or the file
    /// cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }
}
