//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// All are recovered locally: a failed login or registration leaves the
/// session state untouched.
#[derive(Debug, Error, Clone)]
pub enum AuthError {
    /// Invalid email format on registration.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] shopvista_core::EmailError),

    /// Wrong password or unknown user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration email already belongs to the admin or a registered user.
    #[error("email already in use")]
    EmailInUse,
}
