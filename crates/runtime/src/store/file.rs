//! File-based ScoreStore implementation.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ScoreStore, StoreError};

/// File-backed implementation of [`ScoreStore`].
///
/// All keys live in a single JSON object file. Writes go to a temp file
/// followed by an atomic rename, so a crash mid-save leaves the previous
/// contents intact.
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    /// Create a store backed by the given file, creating parent
    /// directories as needed. The file itself is created on first write.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let bytes = fs::read(&self.path)?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let temp_path = self.path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("Saved score store to {}", self.path.display());

        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_default();
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
