//! Local key/value persistence.
//!
//! The storefront persists everything through [`KeyValueStore`]: a
//! string-keyed, synchronous store scoped to one profile - the localStorage
//! analogue. The store is the only durable copy of any state; repositories
//! read through it once at construction and write through on every mutation.
//!
//! ## Contract
//!
//! - `get`/`set`/`remove` are synchronous and never fail under normal
//!   operation. Backend I/O problems are logged and swallowed.
//! - A stored value that fails to parse as the expected structure is treated
//!   as absent by callers, never propagated as a fatal error.
//! - Keys are namespaced one-per-concern (see [`keys`]); the cart key is
//!   parameterized by the session identity.

pub mod file;
pub mod keys;
pub mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, warn};

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors opening a storage backend.
///
/// Only construction can fail; the store operations themselves cannot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing directory could not be created.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A synchronous string-keyed key/value store.
///
/// Implementations use interior mutability so a single store can be shared
/// by every repository in the profile.
pub trait KeyValueStore: Send + Sync {
    /// Read the value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// A shareable handle to a key/value store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Read and parse a JSON value from the store.
///
/// Absent keys and malformed values both yield `None`; malformed values are
/// logged so a corrupted profile is visible in the logs.
pub(crate) fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value is malformed, treating as absent");
            None
        }
    }
}

/// Serialize a value to JSON and write it to the store.
///
/// Serialization of the storefront's own types cannot realistically fail;
/// if it does, the write is skipped and logged rather than corrupting the
/// previous value.
pub(crate) fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => error!(key, error = %e, "Failed to serialize value, skipping write"),
    }
}
