//! This module implements config access.

use std::env;

use anyhow::{Context as _, Result};
use log::{debug, LevelFilter};
use url::Url;

use crate::constants::{API_URL_ENV, LOG_LEVEL_ENV};
use crate::utils::logging;

/// Loads a `.env` file from the working directory, if there is one.
pub fn prepare_environment() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("loaded environment from {}", path.display());
    }
}

/// Represents the test-support config.
#[derive(Debug, Clone)]
pub struct Config {
    api_url: Option<Url>,
    log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: None,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Loads the config from the environment (after applying `.env`).
    pub fn from_env() -> Result<Config> {
        prepare_environment();

        let api_url = match env::var(API_URL_ENV) {
            Ok(value) if !value.trim().is_empty() => Some(
                Url::parse(value.trim())
                    .with_context(|| format!("invalid {API_URL_ENV}: {value}"))?,
            ),
            _ => None,
        };

        let log_level = match env::var(LOG_LEVEL_ENV) {
            Ok(value) => value
                .trim()
                .parse()
                .with_context(|| format!("invalid {LOG_LEVEL_ENV}: {value}"))?,
            Err(_) => LevelFilter::Warn,
        };

        Ok(Config { api_url, log_level })
    }

    /// Overrides the API root every builder configured with this config uses.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Returns the API root override, if any.
    pub fn api_url(&self) -> Option<&Url> {
        self.api_url.as_ref()
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    /// Installs the logger with the configured level.
    pub fn configure_logging(&self) {
        logging::init(self.log_level);
    }
}
