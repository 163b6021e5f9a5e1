//! Storage keys for persisted state.
//!
//! One key per concern. Every key is filesystem-safe by construction so the
//! file backend can use keys as file names directly.

use shopvista_core::SessionId;

/// Key for the full product list.
pub const PRODUCTS: &str = "shopvista-products";

/// Key for the full category list.
pub const CATEGORIES: &str = "shopvista-categories";

/// Key for the anonymous session identity (a bare string, not JSON).
pub const SESSION_IDENTITY: &str = "shopvista-user-id";

/// Key for the persisted auth session.
pub const AUTH_SESSION: &str = "shopvista-auth-session";

/// Key for the registered-users list.
pub const REGISTERED_USERS: &str = "shopvista-registered-users";

/// Key for the content-addressed asset map.
pub const ASSETS: &str = "shopvista-assets";

/// Key for a session's cart line items.
#[must_use]
pub fn cart(session: &SessionId) -> String {
    format!("shopvista-cart-{session}")
}
