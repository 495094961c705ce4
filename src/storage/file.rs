//! File Backend
//!
//! Durable storage backend keeping one file per key under a root directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::storage::StorageBackend;

// == File Backend ==
/// Durable key-value backend: each key maps to `<root>/<key>.json`.
///
/// Keys are expected to be plain names from the storage namespace constants
/// (no path separators).
#[derive(Debug)]
pub struct FileBackend {
    /// Root directory holding one file per key
    root: PathBuf,
}

impl FileBackend {
    /// Creates a file backend rooted at `root`, creating the directory if
    /// needed.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| StoreError::StorageUnavailable(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::StorageUnavailable(e.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .map_err(|e| StoreError::StorageUnavailable(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::StorageUnavailable(e.to_string())),
        }
    }
}
