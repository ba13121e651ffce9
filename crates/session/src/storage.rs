//! Key-value persistence standing in for browser local storage.
//!
//! Values are plain strings, as in local storage; structured values such as
//! the basket are serialized to JSON by their owners before being stored.

use crate::error::{Result, StorageError};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Synchronous string key-value store.
pub trait Storage {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

// =============================================================================
// MemoryStorage
// =============================================================================

/// Volatile storage, for tests and for guest sessions that shouldn't
/// outlive the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// JsonFileStorage
// =============================================================================

/// Storage backed by a single JSON object on disk.
///
/// The whole file is read once on open and rewritten on every mutation,
/// so a later `open` of the same path sees exactly the last written state.
/// Writes go to a sibling temp file first and are renamed into place.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStorage {
    /// Open the storage file at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path).map_err(|source| StorageError::Io {
                path: path.display().to_string(),
                source,
            })?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened storage {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk. The caller commits them to memory only
    /// once this succeeds.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let io_error = |source| StorageError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let json = serde_json::to_string_pretty(entries).map_err(|source| {
            StorageError::Serialize {
                key: "*".to_string(),
                source,
            }
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(io_error)?;
        fs::rename(&tmp, &self.path).map_err(io_error)?;
        Ok(())
    }
}

impl Storage for JsonFileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.flush(&next)?;
        self.entries = next;
        Ok(())
    }
}
