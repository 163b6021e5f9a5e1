//! Integration tests for ShopVista.
//!
//! Cross-module scenarios exercising the storefront library end to end:
//! repositories against the file-backed store, the identity-scoped cart
//! plus checkout handoff, and the auth gate.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopvista-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;

use shopvista_core::Email;
use shopvista_storefront::config::{
    AdminIdentity, DEMO_ADMIN_EMAIL, DEMO_ADMIN_NAME, DEMO_ADMIN_PASSWORD,
};

/// Install a test tracing subscriber once per process.
///
/// Later calls are no-ops; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The demo administrator identity the storefront ships with.
///
/// # Panics
///
/// Never panics; the demo email constant is a valid address.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn demo_admin() -> AdminIdentity {
    AdminIdentity {
        email: Email::parse(DEMO_ADMIN_EMAIL).unwrap_or_else(|_| unreachable!()),
        password: SecretString::from(DEMO_ADMIN_PASSWORD),
        display_name: DEMO_ADMIN_NAME.to_string(),
    }
}
