//! File-backed store: one JSON file per key, atomic writes

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::PersistentStore;
use crate::utils::get_data_dir;

/// Stores each key as `<key>.json` inside a single directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create a store under the platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(get_data_dir()?))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistentStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        // Write atomically (temp file + rename) so readers never observe a
        // partially written value.
        let path = self.key_path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&temp, value).with_context(|| format!("Failed to write {}", temp.display()))?;
        fs::rename(&temp, &path)
            .with_context(|| format!("Failed to rename {} into place", temp.display()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}
