//! Catalog repository.
//!
//! Owns the in-memory product and category lists and mirrors every mutation
//! into the key/value store before returning (write-through). A mutation
//! that fails validation writes nothing.
//!
//! Products are kept newest-first: adds prepend, and the stored order is the
//! read order. Categories are appended in creation order.

mod error;

pub use error::CatalogError;

use chrono::Utc;
use tracing::{info, warn};

use shopvista_core::{CategoryId, ImageRef, ProductId};

use crate::assets::AssetStore;
use crate::models::{Category, CategoryInput, Product, ProductInput};
use crate::seed;
use crate::storage::{SharedStore, keys, read_json, write_json};

/// Repository for products and categories.
///
/// The repository is the sole in-memory mutator of its lists; the key/value
/// store holds the only durable copy. Construct one per profile and pass it
/// by reference to consumers.
pub struct CatalogRepository {
    store: SharedStore,
    assets: AssetStore,
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogRepository {
    /// Load the catalog from the store.
    ///
    /// An absent or malformed product list falls back to the seed catalog
    /// (persisted immediately so the store stays canonical); categories fall
    /// back to empty.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let assets = AssetStore::new(store.clone());

        let products = read_json(store.as_ref(), keys::PRODUCTS).unwrap_or_else(|| {
            info!("No stored products, seeding sample catalog");
            let seeded = seed::sample_products();
            write_json(store.as_ref(), keys::PRODUCTS, &seeded);
            seeded
        });
        let categories = read_json(store.as_ref(), keys::CATEGORIES).unwrap_or_default();

        Self {
            store,
            assets,
            products,
            categories,
        }
    }

    /// The asset store backing locally uploaded images.
    #[must_use]
    pub const fn assets(&self) -> &AssetStore {
        &self.assets
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Current products, newest-first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Add a product.
    ///
    /// Generates a fresh id and creation timestamp, prepends the product,
    /// and persists the full list before returning.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if name, description, image or
    /// category is blank; nothing is written in that case.
    pub fn add_product(&mut self, input: ProductInput) -> Result<Product, CatalogError> {
        validate_product_input(&input)?;

        let product = Product {
            id: ProductId::generate(),
            name: input.name,
            price: input.price,
            description: input.description,
            rating: input.rating,
            image: input.image,
            category: input.category,
            tags: normalize_tags(input.tags),
            created_at: Utc::now(),
        };

        self.products.insert(0, product.clone());
        self.persist_products();
        info!(product = %product.id, name = %product.name, "Added product");
        Ok(product)
    }

    /// Replace all mutable fields of the product with `id`.
    ///
    /// The id and creation timestamp are preserved. If the image moves away
    /// from an owned asset, the old asset reference is released.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] on blank required fields and
    /// [`CatalogError::NotFound`] if `id` is absent.
    pub fn update_product(
        &mut self,
        id: &ProductId,
        input: ProductInput,
    ) -> Result<Product, CatalogError> {
        validate_product_input(&input)?;

        let Some(existing) = self.products.iter_mut().find(|p| &p.id == id) else {
            warn!(product = %id, "Update for unknown product");
            return Err(CatalogError::NotFound(id.to_string()));
        };

        let old_image = existing.image.clone();
        existing.name = input.name;
        existing.price = input.price;
        existing.description = input.description;
        existing.rating = input.rating;
        existing.image = input.image;
        existing.category = input.category;
        existing.tags = normalize_tags(input.tags);
        let updated = existing.clone();

        self.release_if_replaced(&old_image, &updated.image);
        self.persist_products();
        info!(product = %id, "Updated product");
        Ok(updated)
    }

    /// Delete the product with `id`, releasing its asset image if it owns one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if `id` is absent; the list is
    /// left untouched (non-fatal, logged).
    pub fn remove_product(&mut self, id: &ProductId) -> Result<(), CatalogError> {
        let Some(index) = self.products.iter().position(|p| &p.id == id) else {
            warn!(product = %id, "Remove for unknown product");
            return Err(CatalogError::NotFound(id.to_string()));
        };

        let removed = self.products.remove(index);
        if let Some(asset_id) = removed.image.asset_id() {
            self.assets.release(asset_id);
        }
        self.persist_products();
        info!(product = %id, name = %removed.name, "Removed product");
        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Current categories, in creation order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Add a category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if name or image is blank.
    pub fn add_category(&mut self, input: CategoryInput) -> Result<Category, CatalogError> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::Validation("name"));
        }
        if input.image_url.is_blank() {
            return Err(CatalogError::Validation("image"));
        }

        let category = Category {
            id: CategoryId::generate(),
            name: input.name,
            image_url: input.image_url,
        };

        self.categories.push(category.clone());
        self.persist_categories();
        info!(category = %category.id, name = %category.name, "Added category");
        Ok(category)
    }

    /// Delete the category with `id`, releasing its asset image if it owns
    /// one. Categories have no update operation.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if `id` is absent.
    pub fn remove_category(&mut self, id: &CategoryId) -> Result<(), CatalogError> {
        let Some(index) = self.categories.iter().position(|c| &c.id == id) else {
            warn!(category = %id, "Remove for unknown category");
            return Err(CatalogError::NotFound(id.to_string()));
        };

        let removed = self.categories.remove(index);
        if let Some(asset_id) = removed.image_url.asset_id() {
            self.assets.release(asset_id);
        }
        self.persist_categories();
        info!(category = %id, name = %removed.name, "Removed category");
        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_products(&self) {
        write_json(self.store.as_ref(), keys::PRODUCTS, &self.products);
    }

    fn persist_categories(&self) {
        write_json(self.store.as_ref(), keys::CATEGORIES, &self.categories);
    }

    fn release_if_replaced(&self, old: &ImageRef, new: &ImageRef) {
        if let Some(asset_id) = old.asset_id()
            && old != new
        {
            self.assets.release(asset_id);
        }
    }
}

/// Reject blank required fields before any state changes.
fn validate_product_input(input: &ProductInput) -> Result<(), CatalogError> {
    if input.name.trim().is_empty() {
        return Err(CatalogError::Validation("name"));
    }
    if input.description.trim().is_empty() {
        return Err(CatalogError::Validation("description"));
    }
    if input.image.is_blank() {
        return Err(CatalogError::Validation("image"));
    }
    if input.category.as_str().trim().is_empty() {
        return Err(CatalogError::Validation("category"));
    }
    Ok(())
}

/// Tags are stored lowercase; order and duplicates are preserved.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().map(|t| t.to_lowercase()).collect()
}
