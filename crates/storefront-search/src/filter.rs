//! Facet predicates applied after text search.
//!
//! All predicates are conjunctive. An unset criterion never excludes an item,
//! except that a price bound excludes items without a price.
use storefront_core::traits::SearchableItem;
use storefront_core::types::FilterCriteria;

pub fn matches_filters<T: SearchableItem + ?Sized>(item: &T, criteria: &FilterCriteria) -> bool {
    matches_label(item.category(), criteria.category())
        && matches_label(item.brand(), criteria.brand())
        && matches_price(item.price(), criteria.price_min, criteria.price_max)
        && (!criteria.requires_in_stock() || item.in_stock() == Some(true))
        && (!criteria.requires_featured() || item.featured() == Some(true))
}

fn matches_label(value: Option<&str>, wanted: Option<&str>) -> bool {
    match wanted {
        Some(wanted) => value == Some(wanted),
        None => true,
    }
}

fn matches_price(price: Option<f64>, min: Option<f64>, max: Option<f64>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    let Some(price) = price else { return false };
    min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::types::Product;

    fn product(price: Option<f64>) -> Product {
        Product {
            category: Some("Teas".to_string()),
            brand: Some("Leafwise".to_string()),
            price,
            in_stock: Some(true),
            ..Product::new("p", "Sample")
        }
    }

    #[test]
    fn empty_criteria_keep_everything() {
        assert!(matches_filters(&Product::new("bare", "Bare"), &FilterCriteria::new()));
    }

    #[test]
    fn labels_match_exactly() {
        let item = product(Some(10.0));
        assert!(matches_filters(&item, &FilterCriteria::new().with_category("Teas")));
        assert!(!matches_filters(&item, &FilterCriteria::new().with_category("Tea")));
        assert!(!matches_filters(&item, &FilterCriteria::new().with_brand("leafwise")));
        assert!(matches_filters(&item, &FilterCriteria::new().with_category("")), "empty label does not constrain");
    }

    #[test]
    fn price_bounds_are_inclusive_and_drop_unpriced_items() {
        let criteria = FilterCriteria::new().with_price_range(Some(10.0), Some(20.0));
        assert!(matches_filters(&product(Some(10.0)), &criteria));
        assert!(matches_filters(&product(Some(20.0)), &criteria));
        assert!(!matches_filters(&product(Some(20.01)), &criteria));
        assert!(!matches_filters(&product(None), &criteria));
        assert!(!matches_filters(&product(None), &FilterCriteria::new().with_price_range(None, Some(50.0))));
    }

    #[test]
    fn boolean_filters_only_constrain_when_true() {
        let mut item = product(None);
        item.featured = None;
        assert!(matches_filters(&item, &FilterCriteria::new().with_featured(false)));
        assert!(!matches_filters(&item, &FilterCriteria::new().with_featured(true)));
        assert!(matches_filters(&item, &FilterCriteria::new().with_in_stock(true)));
        item.in_stock = Some(false);
        assert!(!matches_filters(&item, &FilterCriteria::new().with_in_stock(true)));
    }
}
