//! Product filter/sort pipeline.
//!
//! A pure function from (catalog, query parameters) to an ordered product
//! list. The pipeline never mutates or retains its input; it returns a new
//! sequence each call, so callers re-derive on every query-parameter change.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopvista_core::CategoryId;

use crate::models::Product;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Descending by creation time.
    #[default]
    Newest,
    /// Ascending by creation time.
    Oldest,
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
}

/// Unknown sort key string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(String);

impl std::str::FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "priceAsc" => Ok(Self::PriceAsc),
            "priceDesc" => Ok(Self::PriceDesc),
            other => Err(UnknownSortKey(other.to_owned())),
        }
    }
}

/// Category restriction applied after the text match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Keep all categories.
    #[default]
    All,
    /// Keep only products whose category equals this id exactly.
    Id(CategoryId),
}

impl CategoryFilter {
    /// Parse the UI's category selector value, where `"all"` means no
    /// restriction.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Id(CategoryId::new(s))
        }
    }
}

/// The full set of query parameters for one derivation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    /// Free-text search; blank means no text restriction.
    pub query: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Sort order.
    pub sort: SortKey,
}

/// Derive the filtered, sorted product list for `params`.
///
/// Filtering: a non-blank query keeps products whose name, description or
/// any tag contains it case-insensitively; a category id keeps exact
/// category matches. Sorting is stable - products with equal sort keys stay
/// in their catalog order.
#[must_use]
pub fn apply(catalog: &[Product], params: &ProductQuery) -> Vec<Product> {
    let needle = params.query.trim().to_lowercase();

    let mut result: Vec<Product> = catalog
        .iter()
        .filter(|product| needle.is_empty() || matches_text(product, &needle))
        .filter(|product| match &params.category {
            CategoryFilter::All => true,
            CategoryFilter::Id(id) => &product.category == id,
        })
        .cloned()
        .collect();

    match params.sort {
        SortKey::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => result.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    result
}

/// Case-insensitive substring match on name, description, or any tag.
///
/// `needle` must already be lowercase. Tags are lowercased here too, even
/// though the repository normalizes them on write, so stored data that
/// bypassed normalization still matches.
fn matches_text(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use shopvista_core::{ImageRef, Price, ProductId, Rating};

    fn product(id: &str, price_cents: i64, age_days: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::new(Decimal::new(price_cents, 2)).unwrap(),
            description: "A test product.".to_string(),
            rating: Rating::new(Decimal::new(40, 1)).unwrap(),
            image: ImageRef::parse("https://example.com/p.jpg"),
            category: CategoryId::new(category),
            tags: vec![],
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    fn prices(result: &[Product]) -> Vec<Decimal> {
        result.iter().map(|p| p.price.amount()).collect()
    }

    #[test]
    fn test_price_asc_is_non_decreasing() {
        let catalog = vec![
            product("a", 300, 1, "x"),
            product("b", 100, 2, "x"),
            product("c", 200, 3, "x"),
        ];
        let result = apply(
            &catalog,
            &ProductQuery {
                sort: SortKey::PriceAsc,
                ..ProductQuery::default()
            },
        );
        let sorted = prices(&result);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_price_desc_is_non_increasing() {
        let catalog = vec![
            product("a", 100, 1, "x"),
            product("b", 300, 2, "x"),
            product("c", 200, 3, "x"),
        ];
        let result = apply(
            &catalog,
            &ProductQuery {
                sort: SortKey::PriceDesc,
                ..ProductQuery::default()
            },
        );
        let sorted = prices(&result);
        assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_equal_prices_keep_catalog_order() {
        let catalog = vec![
            product("first", 100, 1, "x"),
            product("second", 100, 2, "x"),
            product("third", 100, 3, "x"),
        ];
        let result = apply(
            &catalog,
            &ProductQuery {
                sort: SortKey::PriceAsc,
                ..ProductQuery::default()
            },
        );
        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_never_mutates_the_catalog() {
        let catalog = vec![
            product("a", 300, 1, "x"),
            product("b", 100, 2, "y"),
        ];
        let before = catalog.clone();

        let _ = apply(
            &catalog,
            &ProductQuery {
                query: "product".to_string(),
                category: CategoryFilter::parse("x"),
                sort: SortKey::PriceAsc,
            },
        );

        assert_eq!(catalog, before);
    }

    #[test]
    fn test_newest_and_oldest_order_by_created_at() {
        let catalog = vec![
            product("middle", 100, 2, "x"),
            product("newest", 100, 1, "x"),
            product("oldest", 100, 3, "x"),
        ];

        let newest_first = apply(
            &catalog,
            &ProductQuery {
                sort: SortKey::Newest,
                ..ProductQuery::default()
            },
        );
        let ids: Vec<&str> = newest_first.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle", "oldest"]);

        let oldest_first = apply(
            &catalog,
            &ProductQuery {
                sort: SortKey::Oldest,
                ..ProductQuery::default()
            },
        );
        let ids: Vec<&str> = oldest_first.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["oldest", "middle", "newest"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = vec![
            product("a", 100, 1, "Electronics"),
            product("b", 100, 2, "Electro"),
        ];
        let result = apply(
            &catalog,
            &ProductQuery {
                category: CategoryFilter::parse("Electronics"),
                ..ProductQuery::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().id.as_str(), "a");
    }

    #[test]
    fn test_mouse_query_against_seed_catalog() {
        let catalog = seed::sample_products();
        let result = apply(
            &catalog,
            &ProductQuery {
                query: "mouse".to_string(),
                category: CategoryFilter::parse("all"),
                sort: SortKey::Newest,
            },
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().name, "Wireless Gaming Mouse");
    }

    #[test]
    fn test_query_matches_tags_case_insensitively() {
        let mut p = product("tagged", 100, 1, "x");
        p.tags = vec!["ergonomic".to_string()];
        let catalog = vec![p, product("other", 100, 2, "x")];

        let result = apply(
            &catalog,
            &ProductQuery {
                query: "ERGO".to_string(),
                ..ProductQuery::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().id.as_str(), "tagged");
    }

    #[test]
    fn test_query_matches_unnormalized_stored_tags() {
        // Tags written by the repository are lowercase, but the pipeline
        // must not depend on that for data read straight from storage.
        let mut p = product("tagged", 100, 1, "x");
        p.tags = vec!["Ergonomic".to_string()];
        let catalog = vec![p, product("other", 100, 2, "x")];

        let result = apply(
            &catalog,
            &ProductQuery {
                query: "ergo".to_string(),
                ..ProductQuery::default()
            },
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().id.as_str(), "tagged");
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("priceAsc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::Newest);
        assert!("cheapest".parse::<SortKey>().is_err());
    }
}
