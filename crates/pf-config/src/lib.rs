mod config;
mod error;
mod gateway_config;
mod log_level;
mod logging_config;
mod session_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gateway_config::GatewayConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;

pub(crate) const CONFIG_DIR_ENV: &str = "PF_CONFIG_DIR";
pub(crate) const DEFAULT_CONFIG_DIR: &str = ".pf";
pub(crate) const CONFIG_FILENAME: &str = "config.toml";

// Gateway
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:54321";
pub const DEFAULT_GATEWAY_TIMEOUT_SECS: u64 = 30;
pub const MIN_GATEWAY_TIMEOUT_SECS: u64 = 1;
pub const MAX_GATEWAY_TIMEOUT_SECS: u64 = 300;

// Storage
pub const DEFAULT_AVATAR_BUCKET: &str = "profile_img";
pub const DEFAULT_CACHE_CONTROL_SECS: u64 = 3600;
pub const MAX_CACHE_CONTROL_SECS: u64 = 31_536_000;

// Session
pub const DEFAULT_SESSION_FILENAME: &str = "session.json";

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
