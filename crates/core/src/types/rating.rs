//! Product rating type.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingError {
    /// Ratings live in the closed interval [1.0, 5.0].
    #[error("rating must be between 1.0 and 5.0, got {0}")]
    OutOfRange(Decimal),
}

/// A product rating in the range 1.0 to 5.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Create a new rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for values outside 1.0-5.0.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ONE || value > Decimal::from(5) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
