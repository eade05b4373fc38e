pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::deletion_plan::{DeletionPlan, DeletionTarget};
pub use models::profile_snapshot::ProfileSnapshot;
pub use models::route::Route;
pub use models::selected_file::SelectedFile;
pub use models::storage_key::StorageKey;
pub use models::upload_result::UploadResult;
pub use models::user_field::UserField;
pub use models::user_id::UserId;
pub use models::user_identity::UserIdentity;

/// Extension assumed for stored avatars whose original extension is unknown.
pub const DEFAULT_AVATAR_EXTENSION: &str = "jpg";
