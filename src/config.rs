//! Configuration Module
//!
//! Handles loading client and cache settings from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::CacheConfig;

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seconds an API response stays cached
    pub cache_retention: u64,
    /// Seconds between reap passes; `None` reuses `cache_retention`
    pub cache_reap_interval: Option<u64>,
    /// Reject stale entries on read instead of waiting for the reaper
    pub cache_strict_expiry: bool,
    /// PokeAPI root URL, without trailing slash
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_RETENTION` - Cache retention in seconds (default: 5)
    /// - `CACHE_REAP_INTERVAL` - Reap interval in seconds (default: retention)
    /// - `CACHE_STRICT_EXPIRY` - `true`/`1` to hide stale entries on read (default: false)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_retention: env::var("CACHE_RETENTION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_retention),
            cache_reap_interval: env::var("CACHE_REAP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok()),
            cache_strict_expiry: env::var("CACHE_STRICT_EXPIRY")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_strict_expiry),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
        }
    }

    /// Converts the cache settings; validation happens when the cache is built.
    pub fn cache_config(&self) -> CacheConfig {
        let retention = Duration::from_secs(self.cache_retention);
        let reap_interval = self
            .cache_reap_interval
            .map(Duration::from_secs)
            .unwrap_or(retention);

        CacheConfig::new(retention)
            .with_reap_interval(reap_interval)
            .with_strict_expiry(self.cache_strict_expiry)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_retention: 5,
            cache_reap_interval: None,
            cache_strict_expiry: false,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
