//! # Runtime Configuration
//!
//! Unified configuration for the data layer, with sane defaults and
//! environment overrides.

use fleetdesk_gateway::DEFAULT_TIMEOUT_SECS;
use thiserror::Error;

/// Complete runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    /// API endpoint configuration.
    pub api: ApiConfig,
}

impl RuntimeConfig {
    /// Build from environment variables, falling back to defaults.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `FLEETDESK_API_URL` | `http://localhost:4000/api` | API base URL |
    /// | `FLEETDESK_TIMEOUT_SECS` | `30` | Request timeout ceiling |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("FLEETDESK_API_URL") {
            config.api.base_url = url;
        }
        if let Some(secs) = std::env::var("FLEETDESK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.api.timeout_secs = secs;
        }
        config
    }

    /// Validate the configuration before wiring the container.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidBaseUrl(self.api.base_url.clone()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// API endpoint configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL all resource paths are appended to.
    pub base_url: String,
    /// Fixed request timeout ceiling in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/api".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an HTTP(S) URL.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// A zero timeout would never complete a request.
    #[error("Request timeout must be non-zero")]
    ZeroTimeout,
}
