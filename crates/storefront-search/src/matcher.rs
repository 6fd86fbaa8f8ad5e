use storefront_core::traits::{FieldValue, SearchableItem};
use storefront_core::types::SearchField;

use crate::options::SearchOptions;

/// Whitespace-separated query terms matched as substrings.
///
/// An item matches when every term occurs in at least one configured field;
/// the terms do not have to share a field. Without case sensitivity both
/// the terms and the field text are lowercased before comparison.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    terms: Vec<String>,
    fields: Vec<SearchField>,
    case_sensitive: bool,
}

impl QueryMatcher {
    pub fn new(query: &str, options: &SearchOptions) -> Self {
        let normalized = if options.case_sensitive { query.to_string() } else { query.to_lowercase() };
        let terms = normalized.split_whitespace().map(str::to_string).collect();
        Self { terms, fields: options.search_fields.clone(), case_sensitive: options.case_sensitive }
    }

    /// False for an empty or whitespace-only query, which matches everything.
    pub fn is_active(&self) -> bool {
        !self.terms.is_empty()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn matches<T: SearchableItem + ?Sized>(&self, item: &T) -> bool {
        self.terms
            .iter()
            .all(|term| self.fields.iter().any(|field| self.field_contains(item.field_value(*field), term)))
    }

    fn field_contains(&self, value: FieldValue<'_>, term: &str) -> bool {
        match value {
            FieldValue::Text(text) => self.text_contains(text, term),
            FieldValue::List(values) => values.iter().any(|v| self.text_contains(v, term)),
            FieldValue::Missing => false,
        }
    }

    fn text_contains(&self, text: &str, term: &str) -> bool {
        if self.case_sensitive {
            text.contains(term)
        } else {
            text.to_lowercase().contains(term)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::types::Product;

    fn tea() -> Product {
        Product {
            description: Some("Whole-leaf ORGANIC green tea".to_string()),
            tags: vec!["Caffeine".to_string(), "loose-leaf".to_string()],
            ..Product::new("t-1", "Sencha Capsule")
        }
    }

    #[test]
    fn whitespace_query_is_inactive() {
        let matcher = QueryMatcher::new("  \t ", &SearchOptions::default());
        assert!(!matcher.is_active());
        assert!(matcher.terms().is_empty());
    }

    #[test]
    fn every_term_must_match_some_field() {
        let options = SearchOptions::default();
        assert!(QueryMatcher::new("organic capsule", &options).matches(&tea()));
        assert!(QueryMatcher::new("caff LEAF", &options).matches(&tea()));
        assert!(!QueryMatcher::new("organic matcha", &options).matches(&tea()));
    }

    #[test]
    fn case_sensitive_matching_compares_raw_text() {
        let options = SearchOptions::default().with_case_sensitive(true);
        assert!(QueryMatcher::new("ORGANIC Caffeine", &options).matches(&tea()));
        assert!(!QueryMatcher::new("organic", &options).matches(&tea()));
    }

    #[test]
    fn only_configured_fields_are_searched() {
        let options = SearchOptions::default().with_search_fields([SearchField::Name]);
        assert!(QueryMatcher::new("sencha", &options).matches(&tea()));
        assert!(!QueryMatcher::new("organic", &options).matches(&tea()));

        let by_id = SearchOptions::default().with_search_fields([SearchField::Id, SearchField::Brand]);
        assert!(QueryMatcher::new("t-1", &by_id).matches(&tea()));
    }
}
