use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_AVATAR_BUCKET, DEFAULT_CACHE_CONTROL_SECS,
    MAX_CACHE_CONTROL_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Bucket holding uploaded avatars
    pub avatar_bucket: String,
    /// Cache-control max-age attached to uploaded avatars
    pub cache_control_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            avatar_bucket: String::from(DEFAULT_AVATAR_BUCKET),
            cache_control_secs: DEFAULT_CACHE_CONTROL_SECS,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.avatar_bucket.trim().is_empty() || self.avatar_bucket.contains('/') {
            return Err(ConfigError::storage(format!(
                "storage.avatar_bucket must be a non-empty name without '/', got '{}'",
                self.avatar_bucket
            )));
        }

        if self.cache_control_secs > MAX_CACHE_CONTROL_SECS {
            return Err(ConfigError::storage(format!(
                "storage.cache_control_secs must be 0-{}, got {}",
                MAX_CACHE_CONTROL_SECS, self.cache_control_secs
            )));
        }

        Ok(())
    }
}
