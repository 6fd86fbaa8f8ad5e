use storefront_core::traits::SearchableItem;
use storefront_core::types::{FilterCriteria, SearchMetadata};

use crate::facets::extract_metadata;
use crate::filter::matches_filters;
use crate::matcher::QueryMatcher;
use crate::options::SearchOptions;
use crate::sort::sort_items;

/// Filter and order `items` for one (query, filters) pair.
///
/// Text search runs first, then the facet predicates, then the optional sort
/// and result cap. The output borrows from `items` and keeps input order
/// unless a sort key is set. Calling this again with the same inputs yields
/// the same sequence.
pub fn compute<'a, T: SearchableItem>(
    items: &'a [T],
    query: &str,
    filters: &FilterCriteria,
    options: &SearchOptions,
) -> Vec<&'a T> {
    let matcher = QueryMatcher::new(query, options);
    let mut result: Vec<&T> = items
        .iter()
        .filter(|item| !matcher.is_active() || matcher.matches(*item))
        .filter(|item| matches_filters(*item, filters))
        .collect();

    if let Some(sort_by) = filters.sort_by {
        sort_items(&mut result, sort_by);
    }
    if let Some(max_results) = options.max_results {
        result.truncate(max_results);
    }

    tracing::trace!(terms = matcher.terms().len(), total = items.len(), matched = result.len(), "computed result set");
    result
}

/// A catalog paired with search options, for callers that run one-off
/// searches without debouncing.
pub struct CatalogSearch<T> {
    items: Vec<T>,
    options: SearchOptions,
}

impl<T: SearchableItem> CatalogSearch<T> {
    pub fn new(items: Vec<T>, options: SearchOptions) -> Self {
        Self { items, options }
    }

    pub fn search(&self, query: &str, filters: &FilterCriteria) -> Vec<&T> {
        compute(&self.items, query, filters, &self.options)
    }

    pub fn metadata(&self) -> SearchMetadata {
        extract_metadata(&self.items)
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}
