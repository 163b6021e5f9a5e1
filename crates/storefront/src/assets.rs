//! Content-addressed local asset store.
//!
//! Uploaded images are stored as bytes keyed by the SHA-256 of their
//! content, with an explicit reference count per asset. Unlike the blob
//! URLs this replaces, asset references survive a reload: the whole map is
//! persisted in the key/value store under one key.
//!
//! Ownership discipline: [`AssetStore::insert`] takes the first reference;
//! the catalog repository calls [`AssetStore::release`] when a product or
//! category stops pointing at an asset. At zero references the bytes are
//! dropped.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use tracing::{debug, warn};

use shopvista_core::AssetId;

use crate::storage::{SharedStore, keys, read_json, write_json};

/// One stored asset: base64 payload plus its reference count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct AssetRecord {
    data: String,
    refs: u32,
}

/// Content-addressed asset store backed by the key/value store.
#[derive(Clone)]
pub struct AssetStore {
    store: SharedStore,
}

impl AssetStore {
    /// Create a store handle over the shared key/value store.
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Store `bytes` and return their content address.
    ///
    /// Inserting content that is already present bumps its reference count
    /// instead of duplicating the payload.
    #[must_use]
    pub fn insert(&self, bytes: &[u8]) -> AssetId {
        let id = content_address(bytes);
        let mut map = self.load();

        match map.get_mut(&id) {
            Some(record) => record.refs += 1,
            None => {
                map.insert(
                    id.clone(),
                    AssetRecord {
                        data: BASE64.encode(bytes),
                        refs: 1,
                    },
                );
            }
        }

        self.persist(&map);
        debug!(asset = %id, "Stored asset");
        id
    }

    /// Fetch the bytes for `id`, if the asset exists.
    ///
    /// A payload that fails to decode is treated as absent.
    #[must_use]
    pub fn get(&self, id: &AssetId) -> Option<Vec<u8>> {
        let map = self.load();
        let record = map.get(id)?;
        match BASE64.decode(&record.data) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!(asset = %id, error = %e, "Asset payload is malformed");
                None
            }
        }
    }

    /// Take an additional reference to `id`.
    pub fn retain(&self, id: &AssetId) {
        let mut map = self.load();
        match map.get_mut(id) {
            Some(record) => {
                record.refs += 1;
                self.persist(&map);
            }
            None => warn!(asset = %id, "Retain on unknown asset"),
        }
    }

    /// Drop one reference to `id`, deleting the bytes at zero references.
    pub fn release(&self, id: &AssetId) {
        let mut map = self.load();
        let Some(record) = map.get_mut(id) else {
            warn!(asset = %id, "Release on unknown asset");
            return;
        };

        record.refs = record.refs.saturating_sub(1);
        if record.refs == 0 {
            map.remove(id);
            debug!(asset = %id, "Dropped asset at zero references");
        }
        self.persist(&map);
    }

    /// The current reference count for `id`, if the asset exists.
    #[must_use]
    pub fn ref_count(&self, id: &AssetId) -> Option<u32> {
        self.load().get(id).map(|record| record.refs)
    }

    fn load(&self) -> BTreeMap<AssetId, AssetRecord> {
        read_json(self.store.as_ref(), keys::ASSETS).unwrap_or_default()
    }

    fn persist(&self, map: &BTreeMap<AssetId, AssetRecord>) {
        write_json(self.store.as_ref(), keys::ASSETS, map);
    }
}

/// SHA-256 of the content, hex-encoded.
fn content_address(bytes: &[u8]) -> AssetId {
    let digest = Sha256::digest(bytes);
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        let _ = write!(hex, "{byte:02x}");
    }
    AssetId::new(hex)
}
