//! Explorer configuration loaded from TOML.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::game::RESET_DELAY_MS;
use crate::search::{DEBOUNCE_MS, SCORE_CUTOFF};

/// Configuration for the country explorer.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Base URL of the country API.
    #[serde(default = "default_api_base_url")]
    api_base_url: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// Interval a query must stay unchanged before a search runs, in
    /// milliseconds.
    #[serde(default = "default_debounce_ms")]
    debounce_ms: u64,

    /// Score cutoff percentage for the good-match count.
    #[serde(default = "default_score_cutoff")]
    score_cutoff: f64,

    /// Delay before a finished round resets, in milliseconds.
    #[serde(default = "default_reset_delay_ms")]
    reset_delay_ms: u64,

    /// Countries shown per listing page.
    #[serde(default = "default_page_size")]
    page_size: usize,

    /// Where the UI snapshot document is stored.
    #[serde(default = "default_snapshot_path")]
    snapshot_path: String,
}

#[instrument]
fn default_api_base_url() -> String {
    "https://restcountries.com/v2".to_string()
}

#[instrument]
fn default_request_timeout_secs() -> u64 {
    10
}

#[instrument]
fn default_debounce_ms() -> u64 {
    DEBOUNCE_MS
}

#[instrument]
fn default_score_cutoff() -> f64 {
    SCORE_CUTOFF
}

#[instrument]
fn default_reset_delay_ms() -> u64 {
    RESET_DELAY_MS
}

#[instrument]
fn default_page_size() -> usize {
    20
}

#[instrument]
fn default_snapshot_path() -> String {
    "flagquest_state.json".to_string()
}

impl ExplorerConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(api_base_url = %config.api_base_url, "Config loaded successfully");
        Ok(config)
    }

    /// HTTP request timeout as a [`Duration`].
    #[instrument(skip(self))]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Debounce interval as a [`Duration`].
    #[instrument(skip(self))]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Post-round reset delay as a [`Duration`].
    #[instrument(skip(self))]
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            debounce_ms: default_debounce_ms(),
            score_cutoff: default_score_cutoff(),
            reset_delay_ms: default_reset_delay_ms(),
            page_size: default_page_size(),
            snapshot_path: default_snapshot_path(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
