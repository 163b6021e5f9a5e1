//! Domain models for the storefront.
//!
//! All persisted models serialize with camelCase field names, matching the
//! JSON the storefront has always written to its profile storage.

pub mod cart;
pub mod product;
pub mod session;

pub use cart::{CartLineItem, CartTotals};
pub use product::{Category, CategoryInput, Product, ProductInput};
pub use session::{AuthSession, RegisteredUser};
