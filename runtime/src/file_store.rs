//! File-backed implementation of [`KeyValueStore`].
//!
//! The whole map lives in one JSON object file (`{ "key": "value", ... }`).
//! Every call re-reads the file, so several stores pointed at the same path
//! observe each other's writes. Writes go to a sibling `.tmp` file which is
//! then renamed over the original.
//!
//! Reads report an unparsable file as [`StorageError::Corrupt`]. Writes treat
//! it as an empty map, so the next `set` or `remove` replaces the bad file.

use checklist_core::storage::{KeyValueStore, StorageError};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Entries::new()),
            Ok(text) => serde_json::from_str(&text).map_err(|error| {
                StorageError::Corrupt(format!("{}: {error}", self.path.display()))
            }),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(error) => Err(error.into()),
        }
    }

    /// Entries to build a write on, and whether the file on disk was corrupt
    fn entries_for_write(&self) -> Result<(Entries, bool), StorageError> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(%reason, "Replacing corrupt storage file");
                Ok((Entries::new(), true))
            },
            Err(error) => Err(error),
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = serde_json::to_string_pretty(entries).map_err(std::io::Error::from)?;

        let mut temp: OsString = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        fs::write(&temp, text)?;
        fs::rename(&temp, &self.path)?;
        tracing::trace!(path = %self.path.display(), keys = entries.len(), "Wrote storage file");
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let (mut entries, corrupt) = self.entries_for_write()?;
        if entries.remove(key).is_some() || corrupt {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
