//! Auth session and registered-user models.

use serde::{Deserialize, Serialize};

use shopvista_core::{Email, Role, UserId};

/// An authenticated session.
///
/// Created on successful login or registration, persisted until logout.
/// There is no expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The authenticated user's email.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Session role.
    pub role: Role,
}

impl AuthSession {
    /// Whether this session carries the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// A locally registered user record.
///
/// The password is stored as entered and login compares it by exact string
/// equality; this demo storefront has no server to hash against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    /// Unique user ID, assigned at registration.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email, unique across registered users and the admin identity.
    pub email: Email,
    /// Password, compared verbatim on login.
    pub password: String,
}
