mod deletion_plan;
mod selected_file;
mod storage_key;
mod upload_result;
mod user_field;
mod user_id;
