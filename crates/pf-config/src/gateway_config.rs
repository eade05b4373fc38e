use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GATEWAY_TIMEOUT_SECS, DEFAULT_GATEWAY_URL,
    MAX_GATEWAY_TIMEOUT_SECS, MIN_GATEWAY_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Connection settings for the remote data gateway.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the backend (tables under `/rest/v1`, blobs under `/storage/v1`)
    pub url: String,
    /// Public (anon) API key sent with every request
    pub api_key: String,
    /// Privileged key used only for deleting the authentication identity
    pub service_role_key: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_GATEWAY_URL),
            api_key: String::new(),
            service_role_key: None,
            timeout_secs: DEFAULT_GATEWAY_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::gateway(format!(
                "gateway.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        if self.timeout_secs < MIN_GATEWAY_TIMEOUT_SECS
            || self.timeout_secs > MAX_GATEWAY_TIMEOUT_SECS
        {
            return Err(ConfigError::gateway(format!(
                "gateway.timeout_secs must be {}-{}, got {}",
                MIN_GATEWAY_TIMEOUT_SECS, MAX_GATEWAY_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self
            .service_role_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            return Err(ConfigError::gateway(
                "gateway.service_role_key cannot be empty when set",
            ));
        }

        Ok(())
    }
}
