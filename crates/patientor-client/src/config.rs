//! Client configuration.
//!
//! Resolved once at startup and passed into the API client, so nothing reads
//! the environment while requests are in flight.

use crate::{ClientError, ClientResult};

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "PATIENTOR_API_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "PATIENTOR_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API location and request timeout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout_secs: u64,
}

impl ClientConfig {
    /// Create a config. Trailing slashes are dropped from `base_url`.
    pub fn new(base_url: &str, timeout_secs: u64) -> ClientResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ClientError::Config("base URL cannot be empty".into()));
        }
        if timeout_secs == 0 {
            return Err(ClientError::Config("timeout must be at least 1s".into()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            timeout_secs,
        })
    }

    /// Load `.env` if present, then read the environment.
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_values(
            std::env::var(BASE_URL_VAR).ok(),
            std::env::var(TIMEOUT_VAR).ok(),
        )
    }

    /// Build from optional raw values; missing or blank values take defaults.
    pub fn from_values(base_url: Option<String>, timeout: Option<String>) -> ClientResult<Self> {
        let base_url = base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match timeout.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(v) => v.parse::<u64>().map_err(|_| {
                ClientError::Config(format!("{} must be a whole number of seconds: {}", TIMEOUT_VAR, v))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(&base_url, timeout_secs)
    }

    /// Replace the base URL, keeping the timeout.
    pub fn with_base_url(self, base_url: &str) -> ClientResult<Self> {
        Self::new(base_url, self.timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_values(None, None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url(), "http://localhost:3001/api");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ClientConfig::from_values(Some("  ".into()), Some("".into())).unwrap();
        assert_eq!(config.timeout_secs(), DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_trims_trailing_slash() {
        let config =
            ClientConfig::from_values(Some("https://example.org/api//".into()), Some("10".into()))
                .unwrap();
        assert_eq!(config.base_url(), "https://example.org/api");
        assert_eq!(config.timeout_secs(), 10);
    }

    #[test]
    fn test_bad_timeout() {
        assert!(matches!(
            ClientConfig::from_values(None, Some("soon".into())),
            Err(ClientError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::from_values(None, Some("0".into())),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::default().with_base_url("http://api:8080/").unwrap();
        assert_eq!(config.base_url(), "http://api:8080");
        assert!(ClientConfig::default().with_base_url("/").is_err());
    }
}
