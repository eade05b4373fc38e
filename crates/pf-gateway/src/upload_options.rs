/// Options attached to a blob upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Replace an existing object at the same path.
    pub upsert: bool,
    /// `max-age` in seconds sent as the object's cache-control.
    pub cache_control_secs: u64,
    pub content_type: Option<String>,
}

impl UploadOptions {
    pub fn overwrite(cache_control_secs: u64) -> Self {
        Self {
            upsert: true,
            cache_control_secs,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: Option<String>) -> Self {
        self.content_type = content_type;
        self
    }
}
