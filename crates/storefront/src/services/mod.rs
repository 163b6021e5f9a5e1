//! Storefront services.

pub mod auth;
