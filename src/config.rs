//! Deployment configuration baked in at build time.
//!
//! A static WASM bundle has no process environment, so values are captured
//! with `option_env!` when the crate is compiled:
//!
//! - `CONVEX_URL`: data service base URL
//! - `AUTH_BASE_URL`: auth service base URL
//! - `SITE_URL`: public URL of this app (default `http://localhost:8080`)
//! - `AUTH_SKEW_MS`: token refresh skew, default 45000
//! - `LIVE_KEEP`: `last` (default) or `none`
//! - `LIVE_POLL_MS`: live query refresh interval, default 2000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::live_query::KeepMode;
use crate::util::constants::AUTH_TOKEN_EXPIRY_SKEW_MS;

pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LIVE_POLL_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("unsupported LIVE_KEEP '{0}' (expected 'last' or 'none')")]
    InvalidKeepMode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub convex_url: String,
    pub auth_base_url: String,
    pub site_url: String,
    pub auth_skew_ms: u64,
    pub keep: KeepMode,
    pub live_poll_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            convex_url: String::new(),
            auth_base_url: String::new(),
            site_url: DEFAULT_SITE_URL.to_owned(),
            auth_skew_ms: AUTH_TOKEN_EXPIRY_SKEW_MS,
            keep: KeepMode::Last,
            live_poll_ms: DEFAULT_LIVE_POLL_MS,
        }
    }
}

impl AppConfig {
    /// Config from the variables present when the crate was compiled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a numeric or keep-mode value does not parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "CONVEX_URL" => option_env!("CONVEX_URL"),
                "AUTH_BASE_URL" => option_env!("AUTH_BASE_URL"),
                "SITE_URL" => option_env!("SITE_URL"),
                "AUTH_SKEW_MS" => option_env!("AUTH_SKEW_MS"),
                "LIVE_KEEP" => option_env!("LIVE_KEEP"),
                "LIVE_POLL_MS" => option_env!("LIVE_POLL_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Config from an arbitrary key lookup; absent keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a numeric or keep-mode value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let url = |key: &str, default: String| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .map_or(default, |v| v.trim().trim_end_matches('/').to_owned())
        };

        let keep = match lookup("LIVE_KEEP") {
            Some(raw) => raw.parse::<KeepMode>().map_err(ConfigError::InvalidKeepMode)?,
            None => defaults.keep,
        };

        Ok(Self {
            convex_url: url("CONVEX_URL", defaults.convex_url),
            auth_base_url: url("AUTH_BASE_URL", defaults.auth_base_url),
            site_url: url("SITE_URL", defaults.site_url),
            auth_skew_ms: parse_number(&lookup, "AUTH_SKEW_MS", defaults.auth_skew_ms)?,
            keep,
            live_poll_ms: parse_number(&lookup, "LIVE_POLL_MS", defaults.live_poll_ms)?,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        None => Ok(default),
    }
}
