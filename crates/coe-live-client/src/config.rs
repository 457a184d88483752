//! Live backend client configuration.
//!
//! Configures the backend base URL and request timeout. Defaults point
//! at the hosted Audit CoE backend; override via environment variables
//! or explicit construction for staging/testing.

use url::Url;

/// Configuration for connecting to the live audit backend.
#[derive(Debug, Clone)]
pub struct LiveApiConfig {
    /// Base URL of the backend (e.g. <https://audit-coe-api.onrender.com>).
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LiveApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `COE_API_BASE_URL` (default: `https://audit-coe-api.onrender.com`)
    /// - `COE_API_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_url("COE_API_BASE_URL", "https://audit-coe-api.onrender.com")?,
            timeout_secs: std::env::var("COE_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a configuration pointing at an explicit base URL (for
    /// tests and local mock servers). Uses a short timeout.
    pub fn for_base(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_secs: 5,
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
