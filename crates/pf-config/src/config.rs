use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    GatewayConfig, LoggingConfig, SessionConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for PF_CONFIG_DIR env var, else use ./.pf/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PF_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PF_CONFIG_DIR env var > ./.pf/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.gateway.validate()?;
        self.storage.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Absolute path of the local session file.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  gateway: {} (timeout {}s, api key {}, service role {})",
            self.gateway.url,
            self.gateway.timeout_secs,
            if self.gateway.api_key.is_empty() {
                "missing"
            } else {
                "set"
            },
            if self.gateway.service_role_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!(
            "  storage: bucket={}, cache_control={}s",
            self.storage.avatar_bucket, self.storage.cache_control_secs
        );
        info!("  session: {}", self.session.file);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Gateway
        Self::apply_env_string("PF_GATEWAY_URL", &mut self.gateway.url);
        Self::apply_env_string("PF_GATEWAY_API_KEY", &mut self.gateway.api_key);
        Self::apply_env_option_string(
            "PF_GATEWAY_SERVICE_ROLE_KEY",
            &mut self.gateway.service_role_key,
        );
        Self::apply_env_parse("PF_GATEWAY_TIMEOUT_SECS", &mut self.gateway.timeout_secs);

        // Storage
        Self::apply_env_string("PF_STORAGE_AVATAR_BUCKET", &mut self.storage.avatar_bucket);
        Self::apply_env_parse(
            "PF_STORAGE_CACHE_CONTROL_SECS",
            &mut self.storage.cache_control_secs,
        );

        // Session
        Self::apply_env_string("PF_SESSION_FILE", &mut self.session.file);

        // Logging
        Self::apply_env_parse("PF_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PF_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PF_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
