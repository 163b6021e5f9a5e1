//! Seed catalog used when the profile has no stored product data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shopvista_core::{CategoryId, ImageRef, Price, ProductId, Rating};

use crate::models::Product;

/// The sample catalog a fresh profile starts with.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    [
        product(
            "1",
            "Premium Wireless Headphones",
            19_999,
            "High-quality noise-cancelling wireless headphones with 30-hour battery life.",
            45,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?q=80&w=2070&auto=format&fit=crop",
            "Electronics",
            &["headphones", "wireless", "audio"],
            "2024-05-10T12:00:00Z",
        ),
        product(
            "2",
            "Ergonomic Office Chair",
            24_999,
            "Comfortable ergonomic chair with lumbar support and adjustable features.",
            48,
            "https://images.unsplash.com/photo-1505843513577-22bb7d21e455?q=80&w=2069&auto=format&fit=crop",
            "Furniture",
            &["chair", "office", "ergonomic"],
            "2024-05-09T10:30:00Z",
        ),
        product(
            "3",
            "Smart Fitness Watch",
            12_999,
            "Track your fitness goals with this sleek smartwatch featuring heart rate monitoring.",
            43,
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?q=80&w=1999&auto=format&fit=crop",
            "Electronics",
            &["watch", "fitness", "smart"],
            "2024-05-08T15:45:00Z",
        ),
        product(
            "4",
            "Organic Cotton T-Shirt",
            2_999,
            "Soft and sustainable organic cotton t-shirt in various colors.",
            46,
            "https://images.unsplash.com/photo-1581655353564-df123a1eb820?q=80&w=1974&auto=format&fit=crop",
            "Clothing",
            &["t-shirt", "organic", "cotton"],
            "2024-05-07T09:15:00Z",
        ),
        product(
            "5",
            "Professional DSLR Camera",
            129_999,
            "High-resolution professional camera for stunning photography.",
            49,
            "https://images.unsplash.com/photo-1516035069371-29a1b244cc32?q=80&w=1964&auto=format&fit=crop",
            "Electronics",
            &["camera", "photography", "professional"],
            "2024-05-06T14:20:00Z",
        ),
        product(
            "6",
            "Stainless Steel Water Bottle",
            2_499,
            "Eco-friendly insulated bottle that keeps drinks cold for 24 hours or hot for 12 hours.",
            47,
            "https://images.unsplash.com/photo-1546868871-7041f2a55e12?q=80&w=1964&auto=format&fit=crop",
            "Kitchen",
            &["bottle", "eco-friendly", "insulated"],
            "2024-05-05T11:50:00Z",
        ),
        product(
            "7",
            "Wireless Gaming Mouse",
            7_999,
            "Precision gaming mouse with customizable RGB lighting and programmable buttons.",
            44,
            "https://images.unsplash.com/photo-1615663245857-ac93bb7c39e7?q=80&w=1965&auto=format&fit=crop",
            "Electronics",
            &["mouse", "gaming", "wireless"],
            "2024-05-04T16:30:00Z",
        ),
        product(
            "8",
            "Premium Yoga Mat",
            4_999,
            "Non-slip, eco-friendly yoga mat with perfect cushioning for comfort.",
            46,
            "https://images.unsplash.com/photo-1592429907166-afb3d732c6af?q=80&w=1974&auto=format&fit=crop",
            "Sports",
            &["yoga", "fitness", "mat"],
            "2024-05-03T08:45:00Z",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Build one seed product; entries with invalid literals are skipped rather
/// than panicking a fresh profile.
#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    price_cents: i64,
    description: &str,
    rating_tenths: i64,
    image: &str,
    category: &str,
    tags: &[&str],
    created_at: &str,
) -> Option<Product> {
    Some(Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::new(Decimal::new(price_cents, 2)).ok()?,
        description: description.to_owned(),
        rating: Rating::new(Decimal::new(rating_tenths, 1)).ok()?,
        image: ImageRef::parse(image),
        category: CategoryId::new(category),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        created_at: created_at.parse::<DateTime<Utc>>().ok()?,
    })
}
