use crate::{ProfileError, ProfileSettings};

use pf_core::{ProfileSnapshot, UserField, UserId, UserIdentity};
use pf_gateway::RemoteGateway;

use log::{debug, info, warn};

const POST_COUNT_FIELD: &str = "post_count";

/// Outcome of the initial load. Always renderable: fields that failed to
/// load keep their empty defaults and the failure is kept in `errors`.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub snapshot: ProfileSnapshot,
    pub identity: Option<UserId>,
    pub errors: Vec<ProfileError>,
}

impl LoadReport {
    fn signed_out(error: ProfileError) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Cached identity record built from the loaded fields.
    pub fn user_identity(&self) -> Option<UserIdentity> {
        self.identity.clone().map(|id| UserIdentity {
            id,
            username: self.snapshot.username.clone(),
            avatar_url: self.snapshot.avatar_url.clone(),
        })
    }

    fn record(&mut self, error: ProfileError) {
        warn!("Profile load: {error}");
        self.errors.push(error);
    }
}

/// Reads the fields the profile screen renders.
pub struct ProfileLoader<'a> {
    gateway: &'a dyn RemoteGateway,
    settings: &'a ProfileSettings,
}

impl<'a> ProfileLoader<'a> {
    pub fn new(gateway: &'a dyn RemoteGateway, settings: &'a ProfileSettings) -> Self {
        Self { gateway, settings }
    }

    /// Resolves the signed-in user, then issues the username, avatar and
    /// post count reads together. A failed read never stops the others.
    pub async fn load(&self) -> LoadReport {
        let user = match self.gateway.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => {
                warn!("Profile load: no signed-in user");
                return LoadReport::signed_out(ProfileError::no_session());
            }
            Err(e) => {
                warn!("Profile load: identity lookup failed: {e}");
                return LoadReport::signed_out(ProfileError::auth(e));
            }
        };

        debug!("Loading profile of {}", user.id);

        let (username, avatar_url, post_count) = futures::join!(
            self.gateway.read_user_field(&user.id, UserField::Username),
            self.gateway.read_user_field(&user.id, UserField::ProfileImage),
            self.gateway.count_rows(
                &self.settings.post_table,
                &self.settings.post_owner_column,
                &user.id,
            ),
        );

        let mut report = LoadReport {
            identity: Some(user.id),
            ..LoadReport::default()
        };

        match username {
            Ok(value) => report.snapshot.username = value.unwrap_or_default(),
            Err(e) => report.record(ProfileError::read(UserField::Username.as_column(), e)),
        }

        match avatar_url {
            Ok(value) => report.snapshot.avatar_url = value.filter(|url| !url.is_empty()),
            Err(e) => report.record(ProfileError::read(UserField::ProfileImage.as_column(), e)),
        }

        match post_count {
            Ok(count) => report.snapshot.post_count = count,
            Err(e) => report.record(ProfileError::read(POST_COUNT_FIELD, e)),
        }

        info!("Profile loaded ({} of 3 fields)", 3 - report.errors.len());

        report
    }
}
