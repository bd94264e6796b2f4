//! JSON file store.
//!
//! The whole file is one JSON object of string values. Writes go to a
//! sibling temp file that is then renamed over the original, so a crash
//! mid-write never leaves a truncated session behind.

use crate::{ApiResult, ClientError, SessionStore};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::warn;

type Entries = BTreeMap<String, String>;

#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> ApiResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| ClientError::storage_io(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| ClientError::storage_corrupted(self.path.clone(), e.to_string()))
    }

    /// Entries to modify; a corrupted file is replaced rather than blocking writes.
    fn entries_for_update(&self) -> ApiResult<Entries> {
        match self.read_entries() {
            Err(ClientError::StorageCorrupted { message, .. }) => {
                warn!(
                    "Discarding corrupted session file {}: {}",
                    self.path.display(),
                    message
                );
                Ok(Entries::new())
            }
            other => other,
        }
    }

    fn write_entries(&self, entries: &Entries) -> ApiResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| ClientError::storage_io(dir.to_path_buf(), e))?;
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, contents).map_err(|e| ClientError::storage_io(temp_path.clone(), e))?;
        fs::rename(&temp_path, &self.path)
            .map_err(|e| ClientError::storage_io(self.path.clone(), e))?;

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.entries_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> ApiResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.entries_for_update()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
