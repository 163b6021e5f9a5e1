//! ShopVista Core - Shared types library.
//!
//! This crate provides common types used across all ShopVista components:
//! - `storefront` - Catalog, cart, search and auth library
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, ratings, emails,
//!   image references and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
