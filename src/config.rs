//! Application configuration.

use crate::consts::cli_consts::{DEFAULT_API_URL, limits, refresh};
use crate::refresh::{CycleLimits, RefreshConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "ANALYTICS_DASHBOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine the home directory")]
    NoHomeDirectory,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analytics API, e.g. `http://localhost:8080/api/analytics`.
    pub api_url: String,
    pub refresh_interval_ms: u64,
    pub top_pages_limit: u32,
    pub recent_sessions_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refresh_interval_ms: refresh::INTERVAL_MS,
            top_pages_limit: limits::TOP_PAGES,
            recent_sessions_limit: limits::RECENT_SESSIONS,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// Fields missing from the file take their default values.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        Ok(serde_json::from_slice(&buf)?)
    }

    /// Like [`Config::load_from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "refresh interval must be greater than zero".to_string(),
            ));
        }
        if self.top_pages_limit == 0 || self.recent_sessions_limit == 0 {
            return Err(ConfigError::Invalid(
                "query limits must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn refresh_config(&self) -> RefreshConfig {
        RefreshConfig {
            interval: self.refresh_interval(),
            limits: CycleLimits {
                top_pages: self.top_pages_limit,
                recent_sessions: self.recent_sessions_limit,
            },
        }
    }
}

/// Location of the config file: `$ANALYTICS_DASHBOARD_CONFIG`, or
/// `~/.analytics-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    let home = home::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(home.join(".analytics-dashboard").join("config.json"))
}
