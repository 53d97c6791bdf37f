// ============================
// crates/page-lib/src/config.rs
// ============================
//! Configuration management for the page host.
//!
//! Only host concerns live here. The alert delay and the password rule are
//! fixed by the page contract and are not configurable.
use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::PageError;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "ecotrack.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "ECOTRACK_";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Host settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Log level directive, e.g. `info` or `ecotrack_page=debug`
    pub log_level: String,
    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Settings {
    /// Load settings from `ecotrack.toml` in the working directory and the environment
    pub fn load() -> Result<Self, PageError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings from an explicit file, then apply environment overrides.
    /// A missing file is not an error; defaults fill the gaps.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PageError> {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check the settings for values the subscriber cannot use
    pub fn validate(&self) -> Result<(), PageError> {
        EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|e| PageError::Config(format!("Invalid log level '{}': {e}", self.log_level)))
    }
}
