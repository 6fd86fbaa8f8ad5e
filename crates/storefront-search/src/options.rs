use std::time::Duration;

use storefront_core::config::SearchSettings;
use storefront_core::types::SearchField;

/// Construction-time knobs for text search and the debounce window.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Fields a query term may match; defaults to name, description and tags.
    pub search_fields: Vec<SearchField>,
    pub debounce: Duration,
    pub case_sensitive: bool,
    /// Truncate results after sorting. `None` keeps everything.
    pub max_results: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchSettings::default().into()
    }
}

impl From<SearchSettings> for SearchOptions {
    fn from(settings: SearchSettings) -> Self {
        Self {
            search_fields: settings.search_fields,
            debounce: Duration::from_millis(settings.debounce_ms),
            case_sensitive: settings.case_sensitive,
            max_results: settings.max_results,
        }
    }
}

impl SearchOptions {
    pub fn with_search_fields(mut self, fields: impl IntoIterator<Item = SearchField>) -> Self {
        self.search_fields = fields.into_iter().collect();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront_behaviour() {
        let options = SearchOptions::default();
        assert_eq!(options.search_fields, SearchField::DEFAULTS.to_vec());
        assert_eq!(options.debounce, Duration::from_millis(300));
        assert!(!options.case_sensitive);
        assert_eq!(options.max_results, None);
    }

    #[test]
    fn settings_convert_milliseconds() {
        let settings = SearchSettings { debounce_ms: 150, max_results: Some(10), ..SearchSettings::default() };
        let options = SearchOptions::from(settings);
        assert_eq!(options.debounce, Duration::from_millis(150));
        assert_eq!(options.max_results, Some(10));
    }
}
