//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults produce the demo storefront.
//!
//! - `SHOPVISTA_DATA_DIR` - Directory for the file-backed store (default: `.shopvista`)
//! - `SHOPVISTA_ADMIN_EMAIL` - Administrator login email (default: demo identity)
//! - `SHOPVISTA_ADMIN_PASSWORD` - Administrator password (default: demo identity)
//! - `SHOPVISTA_ADMIN_NAME` - Administrator display name (default: "Admin User")
//! - `SHOPVISTA_WHATSAPP_NUMBER` - Phone number for checkout handoff (no default;
//!   checkout URLs cannot be built without it)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use shopvista_core::Email;

/// Demo administrator email, matching the seeded storefront.
pub const DEMO_ADMIN_EMAIL: &str = "admin123@gmail.com";

/// Demo administrator password.
pub const DEMO_ADMIN_PASSWORD: &str = "123456789OO";

/// Demo administrator display name.
pub const DEMO_ADMIN_NAME: &str = "Admin User";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory backing the file-based key/value store.
    pub data_dir: PathBuf,
    /// The one fixed administrator identity.
    pub admin: AdminIdentity,
    /// Destination phone number for the WhatsApp checkout handoff.
    pub whatsapp_number: Option<String>,
}

/// The fixed administrator identity the auth gate matches first.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminIdentity {
    /// Administrator login email.
    pub email: Email,
    /// Administrator password, compared by exact string equality.
    pub password: SecretString,
    /// Display name used on the admin's session.
    pub display_name: String,
}

impl std::fmt::Debug for AdminIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminIdentity")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails validation (currently
    /// only the admin email format).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("SHOPVISTA_DATA_DIR", ".shopvista"));
        let admin = AdminIdentity::from_env()?;
        let whatsapp_number = get_optional_env("SHOPVISTA_WHATSAPP_NUMBER");

        Ok(Self {
            data_dir,
            admin,
            whatsapp_number,
        })
    }
}

impl AdminIdentity {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_email = get_env_or_default("SHOPVISTA_ADMIN_EMAIL", DEMO_ADMIN_EMAIL);
        let email = Email::parse(&raw_email).map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPVISTA_ADMIN_EMAIL".to_string(), e.to_string())
        })?;
        let password = SecretString::from(get_env_or_default(
            "SHOPVISTA_ADMIN_PASSWORD",
            DEMO_ADMIN_PASSWORD,
        ));
        let display_name = get_env_or_default("SHOPVISTA_ADMIN_NAME", DEMO_ADMIN_NAME);

        Ok(Self {
            email,
            password,
            display_name,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn demo_admin() -> AdminIdentity {
        AdminIdentity {
            email: Email::parse(DEMO_ADMIN_EMAIL).unwrap(),
            password: SecretString::from(DEMO_ADMIN_PASSWORD),
            display_name: DEMO_ADMIN_NAME.to_string(),
        }
    }

    #[test]
    fn test_demo_identity_matches_seeded_credentials() {
        let admin = demo_admin();
        assert_eq!(admin.email.as_str(), "admin123@gmail.com");
        assert_eq!(admin.password.expose_secret(), "123456789OO");
    }

    #[test]
    fn test_admin_debug_redacts_password() {
        let admin = demo_admin();
        let debug_output = format!("{admin:?}");

        assert!(debug_output.contains("admin123@gmail.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("123456789OO"));
    }
}
