use crate::{CoreError, CoreResult, DEFAULT_AVATAR_EXTENSION, UserId};

use serde::Serialize;

/// Location of a user's avatar inside the avatar bucket.
///
/// The key depends only on the user id and the file extension, so every
/// re-upload with the same extension overwrites the same object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageKey {
    /// `<id>.<ext>`
    pub file_name: String,
    /// `<id>/<id>.<ext>`, the object path inside the bucket.
    pub object_path: String,
}

impl StorageKey {
    /// Derives the key for an uploaded file, keeping its extension.
    #[track_caller]
    pub fn derive(user_id: &UserId, original_name: &str) -> CoreResult<Self> {
        let ext = original_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty() && !ext.contains('/'))
            .ok_or_else(|| {
                CoreError::validation(format!("file has no extension: {original_name}"))
            })?;

        Ok(Self::with_extension(user_id, ext))
    }

    /// Recovers the key of a previously published avatar URL.
    ///
    /// Falls back to the default extension when the URL is absent or was
    /// not produced for this user.
    pub fn from_avatar_url(user_id: &UserId, avatar_url: Option<&str>) -> Self {
        let prefix = format!("{}.", user_id.as_str());

        let ext = avatar_url
            .map(|url| url.split(['?', '#']).next().unwrap_or(url))
            .and_then(|path| path.rsplit('/').next())
            .and_then(|file_name| file_name.strip_prefix(prefix.as_str()))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_AVATAR_EXTENSION);

        Self::with_extension(user_id, ext)
    }

    fn with_extension(user_id: &UserId, ext: &str) -> Self {
        let file_name = format!("{}.{}", user_id.as_str(), ext);
        let object_path = format!("{}/{}", user_id.as_str(), file_name);
        Self {
            file_name,
            object_path,
        }
    }
}
