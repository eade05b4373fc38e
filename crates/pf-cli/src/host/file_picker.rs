use pf_core::SelectedFile;
use pf_profile::{CollaboratorError, CollaboratorResult, FilePicker};

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

/// Picks the file given on the command line. Without a path the pick is
/// treated as cancelled.
#[derive(Debug, Clone, Default)]
pub struct PathFilePicker {
    path: Option<PathBuf>,
}

impl PathFilePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FilePicker for PathFilePicker {
    async fn pick(&self) -> CollaboratorResult<Option<SelectedFile>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| CollaboratorError::file_pick(format!("not a file: {}", path.display())))?
            .to_string();

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| CollaboratorError::file_pick(format!("{}: {e}", path.display())))?;

        debug!("Picked {} ({} bytes)", path.display(), bytes.len());

        let file = SelectedFile::new(name, bytes);
        Ok(Some(match mime_guess::from_path(path).first_raw() {
            Some(content_type) => file.with_content_type(content_type),
            None => file,
        }))
    }
}
