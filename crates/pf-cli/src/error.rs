use crate::session::SessionError;

use pf_config::ConfigError;
use pf_gateway::GatewayError;
use pf_profile::ProfileError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Gateway error: {source} {location}")]
    Gateway {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Profile {
        #[source]
        source: ProfileError,
        location: ErrorLocation,
    },

    #[error("Session error: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing output: {source} {location}")]
    Output {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<GatewayError> for CliError {
    #[track_caller]
    fn from(source: GatewayError) -> Self {
        Self::Gateway {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ProfileError> for CliError {
    #[track_caller]
    fn from(source: ProfileError) -> Self {
        Self::Profile {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Output {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
