use crate::{BusyOp, CollaboratorError};

use pf_gateway::GatewayError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures of the profile workflows.
///
/// `Read`, `Delete` and `MediaRemove` are recorded and reported but never
/// abort the workflow that produced them; every other variant does.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("No active session: {message} {location}")]
    Auth {
        message: String,
        #[source]
        source: Option<GatewayError>,
        location: ErrorLocation,
    },

    #[error("Failed to read {field}: {source} {location}")]
    Read {
        field: &'static str,
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Invalid avatar file '{name}': {message} {location}")]
    InvalidFile {
        name: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("File selection failed: {source} {location}")]
    FileSelection {
        #[source]
        source: CollaboratorError,
        location: ErrorLocation,
    },

    #[error("Avatar upload failed: {source} {location}")]
    Upload {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Failed to persist avatar URL: {source} {location}")]
    Persist {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Failed to load avatar image {url}: {source} {location}")]
    Decode {
        url: String,
        #[source]
        source: CollaboratorError,
        location: ErrorLocation,
    },

    #[error("Failed to delete rows of {table}: {source} {location}")]
    Delete {
        table: String,
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Failed to remove stored avatar {path}: {source} {location}")]
    MediaRemove {
        path: String,
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Failed to delete identity: {source} {location}")]
    IdentityDelete {
        #[source]
        source: GatewayError,
        location: ErrorLocation,
    },

    #[error("Another operation is in progress: {op} {location}")]
    Busy { op: BusyOp, location: ErrorLocation },

    #[error("Invalid view state transition from {from} to {to} {location}")]
    InvalidTransition {
        from: String,
        to: String,
        location: ErrorLocation,
    },
}

impl ProfileError {
    #[track_caller]
    pub fn no_session() -> Self {
        Self::Auth {
            message: "no signed-in user".to_string(),
            source: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(source: GatewayError) -> Self {
        Self::Auth {
            message: "identity lookup failed".to_string(),
            source: Some(source),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn read(field: &'static str, source: GatewayError) -> Self {
        Self::Read {
            field,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_file(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidFile {
            name: name.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_selection(source: CollaboratorError) -> Self {
        Self::FileSelection {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upload(source: GatewayError) -> Self {
        Self::Upload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persist(source: GatewayError) -> Self {
        Self::Persist {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(url: impl Into<String>, source: CollaboratorError) -> Self {
        Self::Decode {
            url: url.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn delete(table: impl Into<String>, source: GatewayError) -> Self {
        Self::Delete {
            table: table.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn media_remove(path: impl Into<String>, source: GatewayError) -> Self {
        Self::MediaRemove {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn identity_delete(source: GatewayError) -> Self {
        Self::IdentityDelete {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn busy(op: BusyOp) -> Self {
        Self::Busy {
            op,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the error aborts the workflow that raised it.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::Read { .. } | Self::Delete { .. } | Self::MediaRemove { .. }
        )
    }

    /// Short description without source location, kept as the last error
    /// of the view state.
    pub fn summary(&self) -> String {
        match self {
            Self::Auth { message, .. } => format!("auth: {message}"),
            Self::Read { field, .. } => format!("read failed: {field}"),
            Self::InvalidFile { name, message, .. } => format!("invalid file {name}: {message}"),
            Self::FileSelection { .. } => "file selection failed".to_string(),
            Self::Upload { .. } => "upload failed".to_string(),
            Self::Persist { .. } => "saving avatar URL failed".to_string(),
            Self::Decode { .. } => "avatar image could not be loaded".to_string(),
            Self::Delete { table, .. } => format!("delete failed: {table}"),
            Self::MediaRemove { path, .. } => format!("media removal failed: {path}"),
            Self::IdentityDelete { .. } => "account deletion failed".to_string(),
            Self::Busy { op, .. } => format!("busy: {op}"),
            Self::InvalidTransition { from, to, .. } => {
                format!("invalid transition {from} -> {to}")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
