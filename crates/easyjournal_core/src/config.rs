//! Summary backend configuration.
//!
//! # Responsibility
//! - Read text-generation settings from the process environment.
//! - Validate values instead of panicking on bad input.
//!
//! # Invariants
//! - The API key is only ever sourced from configuration.
//! - `timeout` is strictly positive.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub message: String,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid `{}`: {}", self.key, self.message)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Empty when unset; the real client refuses to build without it.
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SummaryConfig {
    /// Loads configuration from process environment variables.
    ///
    /// - `GEMINI_API_KEY` (default empty)
    /// - `GEMINI_MODEL` (default `gemini-pro`)
    /// - `GEMINI_BASE_URL`
    /// - `SUMMARY_TIMEOUT_SECS` (default 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let timeout = match non_empty("SUMMARY_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_timeout_secs(&raw)?),
            None => defaults.timeout,
        };

        Ok(Self {
            api_key: non_empty("GEMINI_API_KEY").unwrap_or_default(),
            model: non_empty("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout,
        })
    }
}

fn parse_timeout_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError {
            key: "SUMMARY_TIMEOUT_SECS",
            message: "must be greater than zero".to_string(),
        }),
        Ok(secs) => Ok(secs),
        Err(err) => Err(ConfigError {
            key: "SUMMARY_TIMEOUT_SECS",
            message: format!("`{raw}` is not a number of seconds: {err}"),
        }),
    }
}
