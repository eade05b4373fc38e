pub mod deletion_plan;
pub mod profile_snapshot;
pub mod route;
pub mod selected_file;
pub mod storage_key;
pub mod upload_result;
pub mod user_field;
pub mod user_id;
pub mod user_identity;
