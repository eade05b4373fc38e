use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by the screen's host-side collaborators.
#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Session store error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },

    #[error("Image load error: {message} {location}")]
    Image {
        message: String,
        location: ErrorLocation,
    },

    #[error("File picker error: {message} {location}")]
    FilePick {
        message: String,
        location: ErrorLocation,
    },
}

impl CollaboratorError {
    #[track_caller]
    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn image(message: impl Into<String>) -> Self {
        Self::Image {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn file_pick(message: impl Into<String>) -> Self {
        Self::FilePick {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CollaboratorError>;
