//! ShopVista Storefront library.
//!
//! The storefront core: a product catalog with filter/sort search, a
//! session-scoped shopping cart, an anonymous identity resolver, an auth
//! gate, and a content-addressed asset store. All durable state lives in a
//! string-keyed [`storage::KeyValueStore`]; every repository reads through
//! the store at construction and writes through on every mutation.
//!
//! Rendering, routing and form handling are the caller's concern - this
//! crate only owns the state and the rules.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assets;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod identity;
pub mod models;
pub mod search;
pub mod seed;
pub mod services;
pub mod storage;
