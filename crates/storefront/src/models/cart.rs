//! Cart models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// One entry in a cart: a product snapshot and the quantity requested.
///
/// The product is held by value, frozen at the moment it was added; later
/// catalog edits do not reach into existing carts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Snapshot of the product at add time.
    pub product: Product,
    /// Units requested; always at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    /// The line subtotal (`quantity × unit price`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}

/// Aggregate totals over a cart, computed fresh on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities across all line items.
    pub item_count: u64,
    /// Sum of line subtotals.
    pub amount: Decimal,
}
