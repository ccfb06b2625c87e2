// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage for session preferences.
//!
//! This plays the role a browser's local storage plays for a web page: a
//! flat map of string keys to string values that survives restarts and is
//! scoped to the current user. Values are stored raw, with no envelope or
//! versioning.
//!
//! [`FileStorage`] persists the map as a TOML table in `storage.toml` inside
//! the data directory (see [`crate::paths`]). [`MemoryStorage`] keeps it in
//! process, for tests and throwaway sessions.

use crate::error::{Error, Result};
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// State file name within the data directory.
const STORAGE_FILE: &str = "storage.toml";

/// A string-to-string store that outlives the process.
pub trait Storage {
    /// Reads the value saved under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Saves `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Storage backed by a TOML file on disk.
///
/// Every call goes to the file so that two processes sharing a data
/// directory see each other's writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Opens storage at an explicit file path. The file is created lazily on
    /// the first write.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens storage in the resolved data directory.
    ///
    /// Returns `None` when no data directory can be determined.
    pub fn open() -> Option<Self> {
        Self::open_in(None)
    }

    /// Opens storage in `base_dir`, falling back to the usual resolution.
    pub fn open_in(base_dir: Option<PathBuf>) -> Option<Self> {
        paths::data_dir_with_override(base_dir).map(|mut path| {
            path.push(STORAGE_FILE);
            Self::at_path(path)
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Unparsable contents are replaced; read failures still propagate.
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(Error::Config(err)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %err,
                    "replacing unparsable storage"
                );
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&entries)?)?;
        Ok(())
    }
}

/// Storage that lives only as long as the value does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with one entry, as if saved by an
    /// earlier session.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
