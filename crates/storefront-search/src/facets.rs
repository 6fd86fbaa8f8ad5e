//! Facet extraction for filter controls.
//!
//! Always computed over the full, unfiltered collection so option lists do
//! not shrink as the shopper narrows results.
use std::collections::{BTreeSet, HashMap};

use storefront_core::traits::SearchableItem;
use storefront_core::types::{CatalogStats, CategoryFacet, SearchMetadata};

/// Price range reported when no item carries a price.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 100.0);

pub fn extract_metadata<T: SearchableItem>(items: &[T]) -> SearchMetadata {
    SearchMetadata {
        categories: category_facets(items),
        brands: distinct_brands(items),
        price_range: price_range(items),
        stats: catalog_stats(items),
    }
}

/// Distinct non-empty categories with exact counts, in first-seen order.
pub fn category_facets<T: SearchableItem>(items: &[T]) -> Vec<CategoryFacet> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for category in items.iter().filter_map(|item| item.category()).filter(|c| !c.is_empty()) {
        let count = counts.entry(category).or_insert(0);
        if *count == 0 {
            order.push(category);
        }
        *count += 1;
    }
    order.into_iter().map(|name| CategoryFacet::new(name, counts[name])).collect()
}

/// Distinct non-empty brands, sorted ascending.
pub fn distinct_brands<T: SearchableItem>(items: &[T]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| item.brand())
        .filter(|b| !b.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `(min, max)` over defined prices; NaN prices are skipped.
pub fn price_range<T: SearchableItem>(items: &[T]) -> (f64, f64) {
    items
        .iter()
        .filter_map(|item| item.price())
        .filter(|price| !price.is_nan())
        .fold(None, |range: Option<(f64, f64)>, price| match range {
            Some((min, max)) => Some((min.min(price), max.max(price))),
            None => Some((price, price)),
        })
        .unwrap_or(DEFAULT_PRICE_RANGE)
}

/// Totals over the whole collection. Unrated items count as 0 towards the
/// average rating.
pub fn catalog_stats<T: SearchableItem>(items: &[T]) -> CatalogStats {
    if items.is_empty() {
        return CatalogStats::default();
    }
    let rating_sum: f64 = items.iter().map(|item| item.rating().unwrap_or(0.0)).sum();
    CatalogStats {
        total: items.len(),
        in_stock: items.iter().filter(|item| item.in_stock() == Some(true)).count(),
        featured: items.iter().filter(|item| item.featured() == Some(true)).count(),
        avg_rating: rating_sum / items.len() as f64,
    }
}
