use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_FILENAME};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session file name, relative to the config directory
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: String::from(DEFAULT_SESSION_FILENAME),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.file);
        if self.file.is_empty() || path.is_absolute() || self.file.contains("..") {
            return Err(ConfigError::session(
                "session.file must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
