use pf_config::{DEFAULT_AVATAR_BUCKET, DEFAULT_CACHE_CONTROL_SECS, StorageConfig};
use pf_core::DeletionPlan;

pub const DEFAULT_POST_TABLE: &str = "board";
pub const DEFAULT_POST_OWNER_COLUMN: &str = "user_id";

/// Remote layout the profile workflows operate on.
#[derive(Debug, Clone)]
pub struct ProfileSettings {
    pub avatar_bucket: String,
    pub cache_control_secs: u64,
    pub deletion_plan: DeletionPlan,
    /// Table whose rows are counted as the user's posts.
    pub post_table: String,
    pub post_owner_column: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            avatar_bucket: String::from(DEFAULT_AVATAR_BUCKET),
            cache_control_secs: DEFAULT_CACHE_CONTROL_SECS,
            deletion_plan: DeletionPlan::default(),
            post_table: String::from(DEFAULT_POST_TABLE),
            post_owner_column: String::from(DEFAULT_POST_OWNER_COLUMN),
        }
    }
}

impl From<&StorageConfig> for ProfileSettings {
    fn from(storage: &StorageConfig) -> Self {
        Self {
            avatar_bucket: storage.avatar_bucket.clone(),
            cache_control_secs: storage.cache_control_secs,
            ..Self::default()
        }
    }
}
