use serde::Serialize;

/// What the user card renders: name, avatar and post count.
///
/// Every field defaults to empty so a partially failed load still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileSnapshot {
    pub username: String,
    pub avatar_url: Option<String>,
    pub post_count: u64,
}
