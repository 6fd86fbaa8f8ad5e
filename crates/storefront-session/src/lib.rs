//! storefront-session
//!
//! Stateful wrapper around the search pipeline for interactive callers: the
//! raw query is recorded immediately, takes effect after a debounce window,
//! and every state change bumps a revision the caller can watch.
mod session;
mod state;

pub use session::SearchSession;
pub use state::SessionSnapshot;
