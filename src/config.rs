//! Configuration Module
//!
//! Handles loading and validating service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::error::{CacheError, Result};

const DEFAULT_CACHE_INTERVAL_MS: i64 = 5_000;
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL and reaper period in milliseconds. Signed so that a negative
    /// setting is reported instead of silently replaced.
    pub cache_interval_ms: i64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Entry lifetime and sweep period (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cache_interval_ms: env_or("CACHE_INTERVAL_MS", DEFAULT_CACHE_INTERVAL_MS),
            server_port: env_or("SERVER_PORT", DEFAULT_SERVER_PORT),
        }
    }

    // == Cache Interval ==
    /// Returns the validated cache interval.
    ///
    /// # Errors
    /// [`CacheError::InvalidConfiguration`] if the interval is zero or negative.
    pub fn cache_interval(&self) -> Result<Duration> {
        u64::try_from(self.cache_interval_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .ok_or_else(|| {
                CacheError::InvalidConfiguration(format!(
                    "cache interval must be positive, got {} ms",
                    self.cache_interval_ms
                ))
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval_ms: DEFAULT_CACHE_INTERVAL_MS,
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

/// Reads and parses `name`, falling back to `default` when unset or unparseable.
fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable {}={:?}, using {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
