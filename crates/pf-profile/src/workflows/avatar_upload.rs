use crate::{ImageLoader, ProfileError, ProfileResult, ProfileSettings};

use pf_core::{SelectedFile, StorageKey, UploadResult, UserField};
use pf_gateway::{RemoteGateway, UploadOptions};

use std::sync::atomic::{AtomicI64, Ordering};

use log::{debug, info, warn};
use mime_guess::mime;

/// Versions for published avatar URLs.
///
/// Versions are milliseconds since the Unix epoch and strictly increase
/// per instance, even when the clock stalls or steps backwards.
#[derive(Debug, Default)]
pub struct CacheBuster {
    last: AtomicI64,
}

impl CacheBuster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> i64 {
        self.next_at(chrono::Utc::now().timestamp_millis())
    }

    /// `max(now_ms, last + 1)`.
    pub fn next_at(&self, now_ms: i64) -> i64 {
        let bump = |last: i64| now_ms.max(last.saturating_add(1));

        let previous = match self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(bump(last)))
        {
            Ok(previous) | Err(previous) => previous,
        };

        bump(previous)
    }
}

/// Uploads a new avatar, publishes its versioned URL and pre-loads it.
///
/// Steps run strictly in order and the first failure aborts the rest:
/// validate, resolve identity, derive key, upload, persist URL, pre-load.
pub struct AvatarUploadPipeline<'a> {
    gateway: &'a dyn RemoteGateway,
    image_loader: &'a dyn ImageLoader,
    settings: &'a ProfileSettings,
    cache_buster: &'a CacheBuster,
}

impl<'a> AvatarUploadPipeline<'a> {
    pub fn new(
        gateway: &'a dyn RemoteGateway,
        image_loader: &'a dyn ImageLoader,
        settings: &'a ProfileSettings,
        cache_buster: &'a CacheBuster,
    ) -> Self {
        Self {
            gateway,
            image_loader,
            settings,
            cache_buster,
        }
    }

    /// Checks that the file looks like an image, returning its content type.
    #[track_caller]
    pub fn validate(file: &SelectedFile) -> ProfileResult<String> {
        if file.bytes.is_empty() {
            return Err(ProfileError::invalid_file(&file.name, "file is empty"));
        }

        let ext = file
            .extension()
            .ok_or_else(|| ProfileError::invalid_file(&file.name, "file has no extension"))?;

        match mime_guess::from_ext(ext).first() {
            Some(guessed) if guessed.type_() == mime::IMAGE => Ok(file
                .content_type
                .clone()
                .unwrap_or_else(|| guessed.essence_str().to_string())),
            _ => Err(ProfileError::invalid_file(
                &file.name,
                format!("'.{ext}' is not an image type"),
            )),
        }
    }

    pub async fn run(&self, file: SelectedFile) -> ProfileResult<UploadResult> {
        let content_type = Self::validate(&file)?;

        let user = match self.gateway.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(ProfileError::no_session()),
            Err(e) => return Err(ProfileError::auth(e)),
        };

        let key = StorageKey::derive(&user.id, &file.name)
            .map_err(|e| ProfileError::invalid_file(&file.name, e.to_string()))?;

        debug!(
            "Uploading avatar {} ({} bytes) to {}/{}",
            file.name,
            file.bytes.len(),
            self.settings.avatar_bucket,
            key.object_path
        );

        let options = UploadOptions::overwrite(self.settings.cache_control_secs)
            .with_content_type(Some(content_type));

        self.gateway
            .upload_blob(
                &self.settings.avatar_bucket,
                &key.object_path,
                file.bytes,
                &options,
            )
            .await
            .map_err(ProfileError::upload)?;

        let published_url = self
            .gateway
            .public_url(&self.settings.avatar_bucket, &key.object_path);
        let result = UploadResult::new(published_url, self.cache_buster.next());
        let display_url = result.display_url();

        self.gateway
            .update_user_field(&user.id, UserField::ProfileImage, &display_url)
            .await
            .map_err(ProfileError::persist)?;

        if let Err(e) = self.image_loader.preload(&display_url).await {
            warn!("Avatar persisted but could not be loaded: {e}");
            return Err(ProfileError::decode(display_url, e));
        }

        info!("Avatar of {} updated to version {}", user.id, result.version);

        Ok(result)
    }
}
