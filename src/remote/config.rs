//! Backend connection settings parsed from environment variables.

use super::RemoteError;
use crate::consts::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Request and connect timeouts for backend calls, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Typed connection settings for the board-item backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// API key sent as the `x-api-key` header.
    pub api_key: String,
    pub timeouts: RemoteTimeouts,
}

impl RemoteConfig {
    /// Build typed backend config from environment variables.
    ///
    /// Required:
    /// - `BOARD_API_URL`: backend base URL (trailing slashes are trimmed)
    /// - `BOARD_API_KEY`: API key for the `x-api-key` header
    ///
    /// Optional:
    /// - `BOARD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BOARD_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::MissingConfig`] when a required variable is
    /// absent and [`RemoteError::ConfigParse`] when a timeout is present
    /// but not an integer.
    pub fn from_env() -> Result<Self, RemoteError> {
        let base_url = std::env::var("BOARD_API_URL")
            .map_err(|_| RemoteError::MissingConfig { var: "BOARD_API_URL".into() })?
            .trim_end_matches('/')
            .to_string();
        let api_key = std::env::var("BOARD_API_KEY")
            .map_err(|_| RemoteError::MissingConfig { var: "BOARD_API_KEY".into() })?;
        let timeouts = RemoteTimeouts {
            request_secs: env_parse_u64("BOARD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse_u64("BOARD_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { base_url, api_key, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> Result<u64, RemoteError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|_| RemoteError::ConfigParse(format!("{key} must be an integer, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
