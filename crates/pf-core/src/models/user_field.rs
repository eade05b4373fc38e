use crate::{CoreError, CoreResult, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Columns of the `users` table the profile screen reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Username,
    ProfileImage,
}

impl UserField {
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::ProfileImage => "profile_img",
        }
    }
}

impl FromStr for UserField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "username" => Ok(Self::Username),
            "profile_img" => Ok(Self::ProfileImage),
            _ => Err(CoreError::InvalidUserField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
