//! Anonymous session identity resolver.
//!
//! Each browser profile gets one opaque identity, minted on first cart
//! access and stable for the profile's lifetime. It namespaces the cart
//! storage key and nothing else - it is never an authentication credential.

use chrono::Utc;
use tracing::info;

use shopvista_core::SessionId;

use crate::storage::{KeyValueStore, keys};

/// Resolve the profile's session identity, minting and persisting one if
/// the profile has none yet.
///
/// Repeated calls against the same store always return the same value.
#[must_use]
pub fn resolve(store: &dyn KeyValueStore) -> SessionId {
    if let Some(existing) = store.get(keys::SESSION_IDENTITY)
        && !existing.trim().is_empty()
    {
        return SessionId::new(existing);
    }

    let minted = mint();
    store.set(keys::SESSION_IDENTITY, minted.as_str());
    info!(session = %minted, "Minted session identity");
    minted
}

/// Mint a fresh identity: millisecond timestamp plus a random component,
/// unique with overwhelming probability across invocations.
fn mint() -> SessionId {
    let millis = Utc::now().timestamp_millis();
    let nonce: u64 = rand::random();
    SessionId::new(format!("user_{millis:x}{nonce:016x}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_resolve_is_stable_per_profile() {
        let store = MemoryStore::new();
        let first = resolve(&store);
        let second = resolve(&store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_distinct_profiles_get_distinct_identities() {
        let a = resolve(&MemoryStore::new());
        let b = resolve(&MemoryStore::new());
        assert_ne!(a, b);
    }

    #[test]
    fn test_blank_stored_identity_is_reminted() {
        let store = MemoryStore::new();
        store.set(keys::SESSION_IDENTITY, "  ");
        let id = resolve(&store);
        assert!(!id.as_str().trim().is_empty());
    }
}
