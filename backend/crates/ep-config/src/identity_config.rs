use crate::backend_config::is_http_url;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_AUTH_URL, DEFAULT_IDENTITY_TOKEN_URL,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// Web API key of the identity provider project. Never logged.
    pub api_key: Option<String>,
    pub auth_base_url: String,
    pub token_base_url: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            auth_base_url: String::from(DEFAULT_IDENTITY_AUTH_URL),
            token_base_url: String::from(DEFAULT_IDENTITY_TOKEN_URL),
        }
    }
}

impl IdentityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::identity("identity.api_key cannot be empty"));
        }

        for (name, url) in [
            ("identity.auth_base_url", &self.auth_base_url),
            ("identity.token_base_url", &self.token_base_url),
        ] {
            if !is_http_url(url) {
                return Err(ConfigError::identity(format!(
                    "{name} must start with http:// or https://, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    /// API key, or an error naming the missing setting.
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::identity("identity.api_key (EP_IDENTITY_API_KEY) is not set"))
    }
}
