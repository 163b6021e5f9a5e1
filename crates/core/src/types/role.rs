//! Session role.

use serde::{Deserialize, Serialize};

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Catalog administrator.
    Admin,
    /// Registered shopper.
    #[default]
    User,
}

impl Role {
    /// Whether this role grants admin-panel access.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}
