use pf_core::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials kept between `pf` invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user_id: Option<UserId>,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(access_token: impl Into<String>, user_id: Option<UserId>) -> Self {
        Self {
            access_token: access_token.into(),
            user_id,
            saved_at: Utc::now(),
        }
    }
}
