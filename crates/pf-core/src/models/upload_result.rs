use serde::Serialize;

/// Outcome of publishing an uploaded avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    /// Public URL of the stored object, without any query string.
    pub published_url: String,
    /// Cache-busting token appended as `?t=`.
    pub version: i64,
}

impl UploadResult {
    pub fn new(published_url: impl Into<String>, version: i64) -> Self {
        Self {
            published_url: published_url.into(),
            version,
        }
    }

    /// URL persisted on the identity record and shown to the user.
    pub fn display_url(&self) -> String {
        format!("{}?t={}", self.published_url, self.version)
    }
}
