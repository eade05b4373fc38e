pub(crate) mod error;
pub(crate) mod stored_session;

pub use error::{Result as SessionResult, SessionError};
pub use stored_session::StoredSession;

use pf_profile::{CollaboratorError, CollaboratorResult, SessionStore};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

/// Session file inside the config directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no session has been saved.
    pub fn load(&self) -> SessionResult<Option<StoredSession>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No session file at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(SessionError::file_read(self.path.clone(), e)),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| SessionError::corrupted(self.path.clone(), e.to_string()))
    }

    /// Writes the session with the temp file + fsync + rename sequence so a
    /// crash never leaves a half-written file behind.
    pub fn save(&self, session: &StoredSession) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self
            .path
            .with_extension(format!("json.tmp.{}", std::process::id()));
        let json = serde_json::to_string_pretty(session)?;

        let written = write_synced(&temp_path, json.as_bytes()).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|e| {
                SessionError::atomic_rename(temp_path.clone(), self.path.clone(), e)
            })
        });

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        info!("Saved session to {:?}", self.path);
        Ok(())
    }

    /// Removes the session file. A missing file is already clear.
    pub fn remove(&self) -> SessionResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Removed session file {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::file_remove(self.path.clone(), e)),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn clear(&self) -> CollaboratorResult<()> {
        self.remove().map_err(|e| {
            warn!("Session clear failed: {e}");
            CollaboratorError::session(e.to_string())
        })
    }
}

fn write_synced(path: &Path, contents: &[u8]) -> SessionResult<()> {
    let mut file =
        fs::File::create(path).map_err(|e| SessionError::file_write(path.to_path_buf(), e))?;
    file.write_all(contents).map_err(|e| SessionError::file_write(path.to_path_buf(), e))?;
    file.sync_all().map_err(|e| SessionError::file_write(path.to_path_buf(), e))
}
