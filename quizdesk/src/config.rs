//! Configuration file loading
//!
//! `~/.config/quizdesk/config.toml` (or the platform equivalent). A missing
//! file means defaults; a present but broken file is an error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::DEFAULT_TICK_MS;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the quiz API; every request path is joined beneath it
    pub base_url: String,
    /// Log file; also receives the diagnostic channel. `RUST_LOG` filters it.
    pub log_file: PathBuf,
    /// Spinner tick period in milliseconds
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: Self::default_log_path(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl Config {
    /// Falls back to the current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quizdesk").join("config.toml")
    }

    /// `~/.local/share/quizdesk/quizdesk.log` or the platform equivalent.
    pub fn default_log_path() -> PathBuf {
        let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("quizdesk").join("quizdesk.log")
    }

    /// Load from [`Config::config_path`], defaulting when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - `base_url` is an absolute http(s) URL
    /// - `tick_ms` is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_base()?;

        if self.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Parsed base URL, always ending in `/`.
    pub fn api_base(&self) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid base_url '{}': {}", self.base_url, e),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!("base_url must use http or https, got '{}'", url.scheme()),
            });
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
