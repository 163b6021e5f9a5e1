//! Product and category models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopvista_core::{CategoryId, ImageRef, Price, ProductId, Rating};

/// A catalog product.
///
/// `id` and `created_at` are assigned once by the catalog repository and
/// never change; every other field is replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID, immutable.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Long-form description.
    pub description: String,
    /// Customer rating, 1.0-5.0.
    pub rating: Rating,
    /// Image reference (external URL or local asset).
    pub image: ImageRef,
    /// Category this product belongs to. Usually a known category id, but
    /// freeform values are accepted.
    pub category: CategoryId,
    /// Lowercase tags, order preserved, duplicates permitted.
    pub tags: Vec<String>,
    /// Creation timestamp, immutable.
    pub created_at: DateTime<Utc>,
}

/// The mutable fields of a product, supplied on add and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Long-form description.
    pub description: String,
    /// Customer rating, 1.0-5.0.
    pub rating: Rating,
    /// Image reference.
    pub image: ImageRef,
    /// Category id or freeform category label.
    pub category: CategoryId,
    /// Tags; normalized to lowercase by the repository.
    pub tags: Vec<String>,
}

/// A catalog category.
///
/// Categories are created and deleted, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category ID, immutable.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Image reference (external URL or local asset).
    pub image_url: ImageRef,
}

/// The fields of a category, supplied on add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    /// Display name.
    pub name: String,
    /// Image reference.
    pub image_url: ImageRef,
}
