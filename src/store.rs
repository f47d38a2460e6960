//! Key-value store of named float preferences, kept as filters.json
//!
//! Values are read once at startup and written back on [`KeyValueStore::flush`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, f32>);

#[derive(Debug)]
pub struct KeyValueStore {
    path: PathBuf,
    entries: Entries,
    dirty: bool,
}

impl KeyValueStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(s) => serde_json::from_str(&s).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Entries::default(),
            Err(source) => {
                return Err(StoreError::Read {
                    path: path.clone(),
                    source,
                })
            }
        };
        debug!(path = %path.display(), keys = entries.0.len(), "Store opened");
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    /// Like [`open`](Self::open) but falls back to an empty store. The broken
    /// file is left alone until the next flush overwrites it.
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "Failed to open store, using defaults");
                Self {
                    path,
                    entries: Entries::default(),
                    dirty: false,
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.entries.0.get(key).copied()
    }

    /// Non-finite values cannot round-trip through JSON and are dropped.
    pub fn set_f32(&mut self, key: &str, value: f32) {
        if !value.is_finite() {
            warn!(key, value, "Refusing to store non-finite value");
            return;
        }
        if self.entries.0.insert(key.to_owned(), value) != Some(value) {
            self.dirty = true;
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes pending changes. No-op when nothing changed since the last flush.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.dirty = false;
        debug!(path = %self.path.display(), "Store flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyValueStore::open(dir.path().join("filters.json")).unwrap();
        assert_eq!(store.get_f32("people_start"), None);
        assert!(!store.is_dirty());
    }

    #[test]
    fn values_survive_flush_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("filters.json");
        let mut store = KeyValueStore::open(&path).unwrap();
        store.set_f32("cost_end", 2.0);
        store.set_f32("distance_end", 37.0);
        assert!(store.is_dirty());
        store.flush().unwrap();
        assert!(!store.is_dirty());

        let reopened = KeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.get_f32("cost_end"), Some(2.0));
        assert_eq!(reopened.get_f32("distance_end"), Some(37.0));
    }

    #[test]
    fn unchanged_value_does_not_dirty_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = KeyValueStore::open(dir.path().join("f.json")).unwrap();
        store.set_f32("time_start", 1.0);
        store.flush().unwrap();
        store.set_f32("time_start", 1.0);
        assert!(!store.is_dirty());
    }

    #[test]
    fn non_finite_values_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = KeyValueStore::open(dir.path().join("f.json")).unwrap();
        store.set_f32("people_end", f32::NAN);
        store.set_f32("people_end", f32::INFINITY);
        assert_eq!(store.get_f32("people_end"), None);
        assert!(!store.is_dirty());
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filters.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(KeyValueStore::open(&path), Err(StoreError::Parse { .. })));

        let store = KeyValueStore::open_or_default(&path);
        assert_eq!(store.get_f32("people_start"), None);
        assert_eq!(store.path(), path.as_path());
    }
}
