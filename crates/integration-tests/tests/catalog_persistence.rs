//! Catalog persistence round-trips through the file-backed store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use rust_decimal::Decimal;

use shopvista_core::{CategoryId, ImageRef, Price, Rating};
use shopvista_integration_tests::init_tracing;
use shopvista_storefront::catalog::CatalogRepository;
use shopvista_storefront::models::{Product, ProductInput};
use shopvista_storefront::storage::{FileStore, KeyValueStore, SharedStore, keys};

fn input(name: &str, price_cents: i64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        price: Price::new(Decimal::new(price_cents, 2)).unwrap(),
        description: format!("{name} description"),
        rating: Rating::new(Decimal::new(42, 1)).unwrap(),
        image: ImageRef::parse("https://example.com/p.jpg"),
        category: CategoryId::new("Electronics"),
        tags: vec!["integration".to_string()],
    }
}

fn empty_file_store(dir: &std::path::Path) -> SharedStore {
    let store = FileStore::open(dir).unwrap();
    // An explicit empty list suppresses the seed catalog.
    store.set(keys::PRODUCTS, "[]");
    Arc::new(store)
}

#[test]
fn added_products_survive_a_reload_in_exact_order() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store = empty_file_store(dir.path());
    let mut catalog = CatalogRepository::load(store);
    for i in 0..5 {
        catalog.add_product(input(&format!("Product {i}"), 1_000 + i)).unwrap();
    }
    let expected: Vec<Product> = catalog.products().to_vec();
    drop(catalog);

    let reloaded = CatalogRepository::load(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(reloaded.products(), expected.as_slice());

    // Newest-first: the last add is the first element.
    assert_eq!(reloaded.products().first().unwrap().name, "Product 4");
}

#[test]
fn fresh_profile_gets_the_seed_catalog() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let catalog = CatalogRepository::load(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert!(!catalog.products().is_empty());
    assert!(
        catalog
            .products()
            .iter()
            .any(|p| p.name == "Wireless Gaming Mouse")
    );

    // The seed is persisted, so a reload sees the same catalog.
    let reloaded = CatalogRepository::load(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(reloaded.products(), catalog.products());
}

#[test]
fn corrupted_product_file_falls_back_to_seed() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::open(dir.path()).unwrap();
    store.set(keys::PRODUCTS, "{definitely not a product list");

    let catalog = CatalogRepository::load(Arc::new(store));
    assert!(!catalog.products().is_empty());
}

#[test]
fn asset_backed_image_survives_reload_until_released() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let store = empty_file_store(dir.path());
    let mut catalog = CatalogRepository::load(store);

    let asset_id = catalog.assets().insert(b"fake image bytes");
    let product = catalog
        .add_product(ProductInput {
            image: ImageRef::Asset(asset_id.clone()),
            ..input("Uploaded", 999)
        })
        .unwrap();
    drop(catalog);

    let mut reloaded = CatalogRepository::load(Arc::new(FileStore::open(dir.path()).unwrap()));
    assert_eq!(
        reloaded.assets().get(&asset_id).unwrap(),
        b"fake image bytes"
    );

    reloaded.remove_product(&product.id).unwrap();
    assert!(reloaded.assets().get(&asset_id).is_none());
}
