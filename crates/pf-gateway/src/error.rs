use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors returned by the remote data gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {resource} {location}")]
    NotFound {
        resource: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid request: {message} {location}")]
    InvalidRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GatewayError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        GatewayError::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(resource: impl Into<String>) -> Self {
        GatewayError::NotFound {
            resource: resource.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        GatewayError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        GatewayError::InvalidRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        GatewayError::InvalidResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The requested row or object does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Api { status, .. } => *status == 404 || *status == 406,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GatewayError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
