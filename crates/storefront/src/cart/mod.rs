//! Cart repository.
//!
//! Owns the line items for one session identity and mirrors every mutation
//! into the key/value store under the session-scoped cart key. Line items
//! hold product snapshots, not live catalog references.

pub mod checkout;

use rust_decimal::Decimal;
use tracing::{debug, info};

use shopvista_core::{ProductId, SessionId};

use crate::models::{CartLineItem, CartTotals, Product};
use crate::storage::{SharedStore, keys, read_json, write_json};

/// Repository for one session's cart.
///
/// Invariant: at most one line item per distinct product id.
pub struct CartRepository {
    store: SharedStore,
    key: String,
    items: Vec<CartLineItem>,
}

impl CartRepository {
    /// Load the cart for `session` from the store.
    ///
    /// An absent or malformed cart starts empty.
    #[must_use]
    pub fn load(store: SharedStore, session: &SessionId) -> Self {
        let key = keys::cart(session);
        let items = read_json(store.as_ref(), &key).unwrap_or_default();
        Self { store, key, items }
    }

    /// Current line items, in add order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Add `quantity` units of `product`.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented (additive, not replacing); otherwise a new line item is
    /// appended with a snapshot of the product. A zero quantity is ignored.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            debug!(product = %product.id, "Ignoring zero-quantity add");
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
            info!(product = %product.id, quantity = item.quantity, "Incremented cart line");
        } else {
            self.items.push(CartLineItem {
                product: product.clone(),
                quantity,
            });
            info!(product = %product.id, quantity, "Added cart line");
        }
        self.persist();
    }

    /// Set the quantity of the line item for `product_id` directly.
    ///
    /// A quantity below 1 is a no-op: the line item keeps its prior
    /// quantity. Removal requires an explicit [`Self::remove_item`].
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity < 1 {
            debug!(product = %product_id, "Ignoring sub-minimum quantity update");
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
            self.persist();
        }
    }

    /// Drop the line item for `product_id`; no-op if absent.
    pub fn remove_item(&mut self, product_id: &ProductId) {
        let before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        if self.items.len() != before {
            info!(product = %product_id, "Removed cart line");
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
        info!("Cleared cart");
    }

    /// Aggregate totals, computed fresh on each call.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.items.iter().map(|i| u64::from(i.quantity)).sum(),
            amount: self
                .items
                .iter()
                .map(CartLineItem::subtotal)
                .sum::<Decimal>(),
        }
    }

    fn persist(&self) {
        write_json(self.store.as_ref(), &self.key, &self.items);
    }
}
