use bytes::Bytes;

/// A file chosen through the avatar picker.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Text after the last `.` of the file name, if there is one.
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext)
    }
}
