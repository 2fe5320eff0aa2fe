use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKEND_URL, DEFAULT_HEALTH_TIMEOUT_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, MAX_HEALTH_TIMEOUT_MS, MAX_REQUEST_TIMEOUT_SECS,
    MIN_HEALTH_TIMEOUT_MS, MIN_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Primary REST backend. Optional at runtime: when its health check fails the
/// session resolver falls back to the document store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    /// Bound on the `/api/health` probe
    pub health_timeout_ms: u64,
    /// Bound on every other backend call
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BACKEND_URL),
            health_timeout_ms: DEFAULT_HEALTH_TIMEOUT_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::backend(format!(
                "backend.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.health_timeout_ms < MIN_HEALTH_TIMEOUT_MS
            || self.health_timeout_ms > MAX_HEALTH_TIMEOUT_MS
        {
            return Err(ConfigError::backend(format!(
                "backend.health_timeout_ms must be {}-{}, got {}",
                MIN_HEALTH_TIMEOUT_MS, MAX_HEALTH_TIMEOUT_MS, self.health_timeout_ms
            )));
        }

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::backend(format!(
                "backend.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }

    pub fn health_timeout(&self) -> Duration {
        Duration::from_millis(self.health_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

pub(crate) fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
