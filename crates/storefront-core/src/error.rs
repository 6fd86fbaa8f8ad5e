use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown sort key '{0}' (expected name, price-low, price-high, rating or popular)")]
    InvalidSortKey(String),

    #[error("Unknown search field '{0}' (expected id, name, category, brand, description or tags)")]
    InvalidSearchField(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No tokio runtime available to schedule the debounce timer")]
    NoRuntime,
}

pub type Result<T> = std::result::Result<T, Error>;
