use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use storefront_core::traits::SearchableItem;
use storefront_core::types::SortBy;

/// Stable in-place sort. Missing prices, ratings and popularity sort as 0.
pub fn sort_items<T: SearchableItem + ?Sized>(items: &mut [&T], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => {
            let order = NameOrder::new();
            items.sort_by(|a, b| order.compare(a.name(), b.name()));
        }
        SortBy::PriceLow => items.sort_by(|a, b| or_zero(a.price()).total_cmp(&or_zero(b.price()))),
        SortBy::PriceHigh => items.sort_by(|a, b| or_zero(b.price()).total_cmp(&or_zero(a.price()))),
        SortBy::Rating => items.sort_by(|a, b| or_zero(b.rating()).total_cmp(&or_zero(a.rating()))),
        SortBy::Popular => items.sort_by(|a, b| or_zero(b.popularity()).total_cmp(&or_zero(a.popularity()))),
    }
}

/// Name collation: Unicode root-locale order, so accents and case are
/// secondary and tertiary differences ("Échinacea" before "Fig", "apple"
/// before "Apple").
pub struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = Collator::try_new(&Default::default(), options)
            .map_err(|e| tracing::warn!(error = %e, "root collation data unavailable, ordering names by folded case"))
            .ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => compare_folded(a, b),
        }
    }
}

impl Default for NameOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off comparison; build a [`NameOrder`] when sorting many names.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NameOrder::new().compare(a, b)
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

fn or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::types::Product;

    fn priced(id: &str, price: Option<f64>) -> Product {
        Product { price, ..Product::new(id, id) }
    }

    fn ids(items: &[&Product]) -> Vec<String> {
        items.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn names_ignore_case_before_breaking_ties() {
        let mut names = vec!["banana", "Apple", "cherry", "apple"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, ["apple", "Apple", "banana", "cherry"]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let items = [
            Product::new("z", "Zinc"),
            Product::new("e", "Échinacea"),
            Product::new("f", "Fig"),
            Product::new("c1", "Café"),
            Product::new("c2", "cafe"),
        ];
        let mut view: Vec<&Product> = items.iter().collect();
        sort_items(&mut view, SortBy::Name);
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["cafe", "Café", "Échinacea", "Fig", "Zinc"]);
    }

    #[test]
    fn fallback_order_folds_case() {
        assert_eq!(compare_folded("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_folded("apple", "Apple"), Ordering::Less);
    }

    #[test]
    fn missing_price_sorts_as_zero() {
        let items = [priced("b", Some(5.0)), priced("none", None), priced("a", Some(1.0))];
        let mut view: Vec<&Product> = items.iter().collect();
        sort_items(&mut view, SortBy::PriceLow);
        assert_eq!(ids(&view), ["none", "a", "b"]);
        sort_items(&mut view, SortBy::PriceHigh);
        assert_eq!(ids(&view), ["b", "a", "none"]);
    }

    #[test]
    fn descending_scores_keep_input_order_on_ties() {
        let items = [
            Product { rating: Some(4.0), ..Product::new("x", "x") },
            Product { rating: Some(5.0), ..Product::new("y", "y") },
            Product { rating: Some(4.0), ..Product::new("z", "z") },
            Product::new("unrated", "unrated"),
        ];
        let mut view: Vec<&Product> = items.iter().collect();
        sort_items(&mut view, SortBy::Rating);
        assert_eq!(ids(&view), ["y", "x", "z", "unrated"]);
    }

    #[test]
    fn popularity_sorts_descending() {
        let items = [
            Product { popularity: Some(10.0), ..Product::new("low", "low") },
            Product { popularity: Some(90.0), ..Product::new("high", "high") },
        ];
        let mut view: Vec<&Product> = items.iter().collect();
        sort_items(&mut view, SortBy::Popular);
        assert_eq!(ids(&view), ["high", "low"]);
    }
}
