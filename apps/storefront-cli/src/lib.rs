//! The `storefront` command-line front-end: one-shot search and facet
//! listing, plus an interactive session with debounced queries.
pub mod args;
pub mod commands;
pub mod render;
pub mod repl;
