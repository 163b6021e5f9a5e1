//! Catalog error types.

use thiserror::Error;

/// Errors that can occur during catalog mutations.
///
/// None of these are fatal: a validation failure aborts the operation with
/// no state change, and a not-found mutation is a logged no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required field was blank.
    #[error("required field is blank: {0}")]
    Validation(&'static str),

    /// The referenced product or category does not exist.
    #[error("no catalog entry with id {0}")]
    NotFound(String),
}
