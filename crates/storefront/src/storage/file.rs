//! File-backed store backend.
//!
//! One file per key inside a profile directory. Keys are used as file names
//! directly; every key in [`super::keys`] is filesystem-safe by construction.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, error};

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] that persists each key as a file under a profile
/// directory.
///
/// Reads and writes go straight to disk on every call; there is no cache to
/// fall out of sync with the durable copy.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        debug!(root = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                error!(key, error = %e, "Failed to read key, treating as absent");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = fs::write(self.path_for(key), value) {
            error!(key, error = %e, "Failed to write key");
        }
    }

    fn remove(&self, key: &str) {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => error!(key, error = %e, "Failed to remove key"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileStore::open(dir.path()).unwrap();
        store.set("shopvista-products", "[]");
        drop(store);

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("shopvista-products"), Some("[]".to_string()));
    }

    #[test]
    fn test_get_absent_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("k", "v");
        store.remove("k");
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
