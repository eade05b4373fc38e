use pf_core::UserId;

use serde::Serialize;

/// The authenticated principal behind the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub id: UserId,
    pub email: Option<String>,
}
