use crate::{AuthUser, GatewayResult, UploadOptions};

use pf_core::{UserField, UserId};

use async_trait::async_trait;
use bytes::Bytes;

/// Typed access to the remote relational store, blob store and identity
/// provider.
///
/// Every call is an independent request; implementations hold no
/// per-workflow state, so callers may issue several calls concurrently.
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    /// The user behind the current session, `None` when signed out.
    async fn current_user(&self) -> GatewayResult<Option<AuthUser>>;

    /// Reads one column of the user's `users` row. `Ok(None)` means the
    /// column is null; a missing row is `GatewayError::NotFound`.
    async fn read_user_field(
        &self,
        user_id: &UserId,
        field: UserField,
    ) -> GatewayResult<Option<String>>;

    async fn update_user_field(
        &self,
        user_id: &UserId,
        field: UserField,
        value: &str,
    ) -> GatewayResult<()>;

    /// Deletes every row of `table` whose `column` equals the user id.
    async fn delete_rows(&self, table: &str, column: &str, user_id: &UserId)
    -> GatewayResult<()>;

    /// Counts rows of `table` whose `column` equals the user id.
    async fn count_rows(&self, table: &str, column: &str, user_id: &UserId)
    -> GatewayResult<u64>;

    async fn upload_blob(
        &self,
        bucket: &str,
        path: &str,
        bytes: Bytes,
        options: &UploadOptions,
    ) -> GatewayResult<()>;

    /// Public URL of an object. Pure; performs no request.
    fn public_url(&self, bucket: &str, path: &str) -> String;

    async fn remove_blobs(&self, bucket: &str, paths: &[String]) -> GatewayResult<()>;

    /// Deletes the authentication identity itself.
    async fn delete_identity(&self, user_id: &UserId) -> GatewayResult<()>;
}
