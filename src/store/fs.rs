use super::ProfileStore;
use crate::config::FolioConfig;
use crate::error::{FolioError, Result};
use crate::model::Profile;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-based profile storage: one JSON document, written atomically.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store the profile at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the storage path from configuration, falling back to the
    /// OS-appropriate data directory.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let dir = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_dir()?,
        };
        Ok(Self::new(dir.join(config.data_file_name())))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(FolioError::Io)?;
            }
        }
        Ok(())
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "folio")
        .ok_or_else(|| FolioError::Store("Could not resolve a data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

impl ProfileStore for FileStore {
    fn load(&self) -> Result<Option<Profile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(FolioError::Io)?;
        let profile: Profile =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(Some(profile))
    }

    fn save(&mut self, profile: &Profile) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(profile).map_err(FolioError::Serialization)?;

        // Atomic write: readers never observe a partially written profile.
        let tmp_name = format!(".profile-{}.tmp", Uuid::new_v4());
        let tmp_path = self
            .path
            .parent()
            .map(|p| p.join(&tmp_name))
            .unwrap_or_else(|| PathBuf::from(&tmp_name));
        fs::write(&tmp_path, content).map_err(FolioError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(FolioError::Io)?;

        Ok(())
    }
}
