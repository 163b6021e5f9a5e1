//! Authentication service.
//!
//! The auth gate for admin and user routes. A session is either anonymous
//! or authenticated with a role; transitions happen only through
//! [`AuthService::login`], [`AuthService::register`] and
//! [`AuthService::logout`]. Sessions persist until explicit logout - there
//! is no expiry.
//!
//! Credentials are matched against one fixed administrator identity first,
//! then against the locally persisted registered-users list. Passwords are
//! compared by exact string equality: this storefront has no server to hash
//! against, and the stored records are as local as the session itself.

mod error;

pub use error::AuthError;

use secrecy::ExposeSecret;
use tracing::{info, warn};

use shopvista_core::{Email, Role, UserId};

use crate::config::AdminIdentity;
use crate::models::{AuthSession, RegisteredUser};
use crate::storage::{SharedStore, keys, read_json, write_json};

/// User ID carried by the administrator's session.
const ADMIN_USER_ID: &str = "1";

/// Authentication service.
///
/// Handles login, registration, logout and session read-back. Construct one
/// per profile and pass it by reference to route guards.
pub struct AuthService {
    store: SharedStore,
    admin: AdminIdentity,
    session: Option<AuthSession>,
}

impl AuthService {
    /// Load the service, reading any persisted session through the store.
    ///
    /// A malformed persisted session is treated as absent.
    #[must_use]
    pub fn load(store: SharedStore, admin: AdminIdentity) -> Self {
        let session = read_json(store.as_ref(), keys::AUTH_SESSION);
        Self {
            store,
            admin,
            session,
        }
    }

    /// The current session, if authenticated.
    #[must_use]
    pub const fn current_session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    /// Whether the current session carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(AuthSession::is_admin)
    }

    /// Log in with email and password.
    ///
    /// The fixed administrator pair is matched first (exact match on both
    /// fields); otherwise the registered-users list is searched by email
    /// and the password compared verbatim. On success the session is
    /// established and persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when nothing matches; the
    /// session state is unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        if email == self.admin.email.as_str() && password == self.admin.password.expose_secret() {
            let session = AuthSession {
                user_id: UserId::new(ADMIN_USER_ID),
                email: self.admin.email.clone(),
                name: self.admin.display_name.clone(),
                role: Role::Admin,
            };
            self.establish(session.clone());
            info!(user = %session.email, "Admin logged in");
            return Ok(session);
        }

        let matched = self
            .registered_users()
            .into_iter()
            .find(|user| user.email.as_str() == email && user.password == password);

        match matched {
            Some(user) => {
                let session = AuthSession {
                    user_id: user.id,
                    email: user.email,
                    name: user.name,
                    role: Role::User,
                };
                self.establish(session.clone());
                info!(user = %session.email, "User logged in");
                Ok(session)
            }
            None => {
                warn!(email, "Login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Register a new user and auto-authenticate them with [`Role::User`].
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidEmail`] for a structurally invalid email
    /// and [`AuthError::EmailInUse`] when the email matches the admin
    /// identity or an existing registered user. No record is written on
    /// failure.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        let email = Email::parse(email)?;

        if email == self.admin.email {
            return Err(AuthError::EmailInUse);
        }

        let mut users = self.registered_users();
        if users.iter().any(|user| user.email == email) {
            warn!(email = %email, "Registration for existing email");
            return Err(AuthError::EmailInUse);
        }

        let user = RegisteredUser {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            password: password.to_owned(),
        };
        users.push(user.clone());
        write_json(self.store.as_ref(), keys::REGISTERED_USERS, &users);

        let session = AuthSession {
            user_id: user.id,
            email: user.email,
            name: user.name,
            role: Role::User,
        };
        self.establish(session.clone());
        info!(user = %session.email, "Registered new user");
        Ok(session)
    }

    /// Clear the session, in memory and in the store.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(user = %session.email, "Logged out");
        }
        self.store.remove(keys::AUTH_SESSION);
    }

    fn establish(&mut self, session: AuthSession) {
        write_json(self.store.as_ref(), keys::AUTH_SESSION, &session);
        self.session = Some(session);
    }

    fn registered_users(&self) -> Vec<RegisteredUser> {
        read_json(self.store.as_ref(), keys::REGISTERED_USERS).unwrap_or_default()
    }
}
