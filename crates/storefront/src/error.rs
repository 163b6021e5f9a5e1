//! Unified error handling.
//!
//! Provides a unified `AppError` aggregating the typed failures from every
//! module. Nothing in this crate is fatal: validation and not-found
//! failures are recovered locally, and storage problems degrade to "no
//! data" rather than crashing the profile.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog mutation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
