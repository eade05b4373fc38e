use crate::{CoreError, CoreResult};

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of an authenticated user.
///
/// The value is used verbatim in storage paths and row predicates, so only
/// ASCII alphanumerics, `-`, `_` and `.` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    #[track_caller]
    pub fn new(value: impl Into<String>) -> CoreResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(CoreError::validation("user id cannot be empty"));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(CoreError::validation(format!(
                "user id contains reserved characters: {trimmed}"
            )));
        }
        if trimmed.chars().all(|c| c == '.') {
            return Err(CoreError::validation("user id cannot consist of dots only"));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreResult<Self> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}
