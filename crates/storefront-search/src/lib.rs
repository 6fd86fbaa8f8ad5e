//! storefront-search
//!
//! The pure search/filter/sort pipeline over an in-memory catalog, plus the
//! facet extractor that feeds filter controls. Nothing here holds state
//! between calls; see `storefront-session` for the debounced, stateful
//! wrapper used by interactive front-ends.
pub mod engine;
pub mod facets;
pub mod filter;
pub mod matcher;
pub mod options;
pub mod sort;

pub use engine::{compute, CatalogSearch};
pub use facets::{extract_metadata, DEFAULT_PRICE_RANGE};
pub use matcher::QueryMatcher;
pub use options::SearchOptions;
