//! Runtime configuration.
//!
//! Read from `AGRITRACE_*` environment variables; anything unset keeps its
//! default.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::storage::history::DEFAULT_HISTORY_LIMIT;

pub const ENV_HISTORY_DIR: &str = "AGRITRACE_HISTORY_DIR";
pub const ENV_HISTORY_LIMIT: &str = "AGRITRACE_HISTORY_LIMIT";
pub const ENV_LATENCY_MS: &str = "AGRITRACE_LATENCY_MS";
pub const ENV_FAILURE_RATE: &str = "AGRITRACE_FAILURE_RATE";

/// Default artificial latency of mock API calls.
pub const DEFAULT_LATENCY_MS: u64 = 1500;
/// Default probability that the mock dashboard fetch fails.
pub const DEFAULT_FAILURE_RATE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the scan-history blob.
    pub history_dir: PathBuf,
    pub history_limit: usize,
    pub latency_ms: u64,
    pub failure_rate: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from(".agritrace"),
            history_limit: DEFAULT_HISTORY_LIMIT,
            latency_ms: DEFAULT_LATENCY_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_HISTORY_DIR).filter(|v| !v.trim().is_empty()) {
            config.history_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(ENV_HISTORY_LIMIT) {
            config.history_limit = parse_var(ENV_HISTORY_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_LATENCY_MS) {
            config.latency_ms = parse_var(ENV_LATENCY_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_FAILURE_RATE) {
            config.failure_rate = parse_var(ENV_FAILURE_RATE, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid {
                var: ENV_HISTORY_LIMIT,
                value: self.history_limit.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(ConfigError::Invalid {
                var: ENV_FAILURE_RATE,
                value: self.failure_rate.to_string(),
                reason: "must be within 0..=1".to_string(),
            });
        }
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
