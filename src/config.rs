//! Client configuration
//!
//! Loaded once at startup from `<config_dir>/neuroscan/config.toml`. A missing
//! file means defaults; every field may be omitted.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use crate::error::ConfigError;

const CONFIG_DIR_NAME: &str = "neuroscan";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub demo: DemoConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Prediction service settings
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://alzheimer-fastapi.onrender.com/predict".to_string()
}

fn default_request_timeout() -> u64 {
    60
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl BackendConfig {
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            error: e.to_string(),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Offline demo substitute. Off unless explicitly enabled.
#[derive(Debug, Clone, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_demo_delay")]
    pub delay_ms: u64,
}

fn default_demo_delay() -> u64 {
    2000
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            delay_ms: default_demo_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeChoice,

    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

fn default_notification_secs() -> u64 {
    4
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            notification_secs: default_notification_secs(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.backend.endpoint_url()?;
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => {
                log::info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
