use crate::UserId;

use serde::{Deserialize, Serialize};

/// Cached, read-only copy of the signed-in user's identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl UserIdentity {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            username: String::new(),
            avatar_url: None,
        }
    }
}
