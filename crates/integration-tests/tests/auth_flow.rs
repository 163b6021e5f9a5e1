//! Auth gate end to end against the file-backed store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use shopvista_core::Role;
use shopvista_integration_tests::{demo_admin, init_tracing};
use shopvista_storefront::services::auth::{AuthError, AuthService};
use shopvista_storefront::storage::{FileStore, KeyValueStore, SharedStore, keys};

#[test]
fn admin_session_survives_a_restart_until_logout() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut auth = AuthService::load(Arc::clone(&store), demo_admin());
    let session = auth.login("admin123@gmail.com", "123456789OO").unwrap();
    assert_eq!(session.role, Role::Admin);
    drop(auth);
    drop(store);

    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut reloaded = AuthService::load(Arc::clone(&store), demo_admin());
    assert!(reloaded.is_admin());

    reloaded.logout();
    drop(reloaded);

    let after = AuthService::load(store, demo_admin());
    assert!(after.current_session().is_none());
}

#[test]
fn registered_user_can_log_in_from_a_later_process() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut auth = AuthService::load(Arc::clone(&store), demo_admin());
    auth.register("Sam", "sam@example.com", "passw0rd").unwrap();
    auth.logout();
    drop(auth);
    drop(store);

    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());

    // The registration landed in the persisted user list.
    let raw = store.get(keys::REGISTERED_USERS).unwrap();
    let users: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["email"], "sam@example.com");

    let mut auth = AuthService::load(store, demo_admin());
    let session = auth.login("sam@example.com", "passw0rd").unwrap();
    assert_eq!(session.role, Role::User);
    assert_eq!(session.name, "Sam");
}

#[test]
fn wrong_credentials_leave_the_profile_anonymous() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store: SharedStore = Arc::new(FileStore::open(dir.path()).unwrap());
    let mut auth = AuthService::load(Arc::clone(&store), demo_admin());

    let err = auth.login("nobody@example.com", "nope").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    drop(auth);

    let reloaded = AuthService::load(store, demo_admin());
    assert!(reloaded.current_session().is_none());
}

#[test]
fn corrupted_session_file_is_treated_as_logged_out() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    store.set(keys::AUTH_SESSION, "{not json");

    let auth = AuthService::load(Arc::new(store), demo_admin());
    assert!(auth.current_session().is_none());
    assert!(!auth.is_admin());
}
