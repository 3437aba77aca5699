//! File-based StateRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use pet_core::PetState;

use super::{RepositoryError, Result, StateRepository};

/// File-based implementation of StateRepository.
///
/// The record is stored as pretty-printed JSON in `pet-storage.json` inside
/// the base directory. Saves write a temp file first and rename it over the
/// record, so a crash mid-write leaves the previous record intact.
pub struct FileStateRepository {
    path: PathBuf,
}

impl FileStateRepository {
    /// Name of the record on disk.
    pub const FILE_NAME: &'static str = "pet-storage.json";

    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    /// Location of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for FileStateRepository {
    fn save(&self, state: &PetState) -> Result<()> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(state)?;
        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &self.path).map_err(RepositoryError::Io)?;

        tracing::debug!(
            path = %self.path.display(),
            messages = state.messages.len(),
            "Saved pet record"
        );

        Ok(())
    }

    fn load(&self) -> Result<Option<PetState>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&self.path).map_err(RepositoryError::Io)?;
        let state: PetState = serde_json::from_slice(&bytes)?;

        tracing::debug!(path = %self.path.display(), "Loaded pet record");

        Ok(Some(state))
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(RepositoryError::Io)?;
            tracing::debug!(path = %self.path.display(), "Cleared pet record");
        }
        Ok(())
    }
}
