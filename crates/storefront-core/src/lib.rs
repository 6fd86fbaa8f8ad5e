#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{FieldValue, SearchableItem};
pub use types::{CatalogStats, CategoryFacet, FilterCriteria, Product, SearchField, SearchMetadata, SortBy};
