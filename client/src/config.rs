//! Client configuration parsed from environment variables.

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server origin without trailing slash, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when set.
    pub token: Option<String>,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Config for `base_url` with default timeouts and no token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] unless the URL is `http://` or `https://`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, token: None, timeouts: Timeouts::default() })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `RUNNER_BASE_URL`: default `http://127.0.0.1:8000`
    /// - `RUNNER_API_TOKEN`: bearer token, unset or empty disables auth
    /// - `RUNNER_REQUEST_TIMEOUT_SECS`: default 30
    /// - `RUNNER_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if `RUNNER_BASE_URL` is not an HTTP URL.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("RUNNER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let token = std::env::var("RUNNER_API_TOKEN").ok().filter(|s| !s.is_empty());
        let timeouts = Timeouts {
            request_secs: env_parse_u64("RUNNER_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("RUNNER_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url: normalize_base_url(&base_url)?, token, timeouts })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(h) if !h.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ApiError::Config(format!("invalid base URL: {raw}"))),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
