use crate::{ProfileError, ProfileResult, ProfileSettings};

use pf_core::{StorageKey, UserId};
use pf_gateway::RemoteGateway;

use futures::future::join_all;
use log::{error, info, warn};

/// What an account deletion did before the identity itself was removed.
#[derive(Debug)]
pub struct DeletionReport {
    pub user_id: UserId,
    pub attempted_tables: Vec<String>,
    pub failed_tables: Vec<String>,
    /// Non-fatal failures: dependent-table deletes and media removal.
    pub errors: Vec<ProfileError>,
    pub media_removed: bool,
}

impl DeletionReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Removes every trace of the signed-in user.
///
/// Dependent rows are deleted together, then the stored avatar, then the
/// authentication identity strictly last. Only the identity delete is
/// fatal. Nothing is rolled back: rows deleted before a failed identity
/// delete stay deleted.
pub struct AccountDeletionWorkflow<'a> {
    gateway: &'a dyn RemoteGateway,
    settings: &'a ProfileSettings,
}

impl<'a> AccountDeletionWorkflow<'a> {
    pub fn new(gateway: &'a dyn RemoteGateway, settings: &'a ProfileSettings) -> Self {
        Self { gateway, settings }
    }

    /// `cached_avatar_url` is the avatar URL the screen currently shows;
    /// its extension locates the stored media.
    pub async fn run(&self, cached_avatar_url: Option<&str>) -> ProfileResult<DeletionReport> {
        let user = match self.gateway.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(ProfileError::no_session()),
            Err(e) => return Err(ProfileError::auth(e)),
        };
        let user_id = user.id;

        info!("Deleting account {user_id}");

        let gateway = self.gateway;
        let id = &user_id;
        let targets = self.settings.deletion_plan.targets();
        let outcomes = join_all(targets.iter().map(|target| async move {
            let outcome = gateway.delete_rows(&target.table, &target.column, id).await;
            (target, outcome)
        }))
        .await;

        let mut report = DeletionReport {
            attempted_tables: targets.iter().map(|t| t.table.clone()).collect(),
            failed_tables: Vec::new(),
            errors: Vec::new(),
            media_removed: false,
            user_id: user_id.clone(),
        };

        for (target, outcome) in outcomes {
            if let Err(e) = outcome {
                warn!("Account deletion: rows of {} not deleted: {e}", target.table);
                report.failed_tables.push(target.table.clone());
                report.errors.push(ProfileError::delete(&target.table, e));
            }
        }

        let media = StorageKey::from_avatar_url(&user_id, cached_avatar_url);
        match self
            .gateway
            .remove_blobs(
                &self.settings.avatar_bucket,
                std::slice::from_ref(&media.object_path),
            )
            .await
        {
            Ok(()) => report.media_removed = true,
            Err(e) => {
                warn!("Account deletion: avatar {} not removed: {e}", media.object_path);
                report
                    .errors
                    .push(ProfileError::media_remove(media.object_path, e));
            }
        }

        if let Err(e) = self.gateway.delete_identity(&user_id).await {
            error!(
                "Account deletion: identity {user_id} not deleted after {} of {} table deletes succeeded: {e}",
                report.attempted_tables.len() - report.failed_tables.len(),
                report.attempted_tables.len()
            );
            return Err(ProfileError::identity_delete(e));
        }

        info!(
            "Account {user_id} deleted ({} non-fatal failures)",
            report.errors.len()
        );

        Ok(report)
    }
}
