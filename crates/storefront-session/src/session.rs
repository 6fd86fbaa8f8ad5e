use std::sync::Arc;

use storefront_core::error::{Error, Result};
use storefront_core::traits::SearchableItem;
use storefront_core::types::{FilterCriteria, SearchMetadata};
use storefront_search::{compute, extract_metadata, SearchOptions};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::{sleep_until, Instant};

use crate::state::{SessionSnapshot, Shared};

/// Debounced search state for one caller (one page, one REPL).
///
/// Filters apply synchronously; the text query is recorded immediately but
/// only affects [`SearchSession::filtered_items`] once the debounce window
/// has passed without another edit. The timer runs on the tokio runtime the
/// session was bound to.
pub struct SearchSession<T> {
    items: Arc<[T]>,
    options: SearchOptions,
    shared: Arc<Shared>,
    runtime: Handle,
}

impl<T: SearchableItem> SearchSession<T> {
    /// Bind to the current tokio runtime.
    pub fn new(items: impl Into<Arc<[T]>>, options: SearchOptions) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::with_handle(items, options, runtime))
    }

    pub fn with_handle(items: impl Into<Arc<[T]>>, options: SearchOptions, runtime: Handle) -> Self {
        Self { items: items.into(), options, shared: Arc::new(Shared::new()), runtime }
    }

    /// Record a raw query and (re)start the debounce window.
    ///
    /// Any pending timer is cancelled first. Typing back to the effective
    /// query leaves nothing pending.
    pub fn set_query(&self, query: impl Into<String>) {
        let mut state = self.shared.state.lock();
        state.cancel_pending();
        state.raw_query = query.into();

        if state.raw_query != state.effective_query {
            let generation = state.generation;
            // Read the bound runtime's clock, which may be paused or mocked.
            let _runtime = self.runtime.enter();
            let deadline = Instant::now() + self.options.debounce;
            let shared = Arc::downgrade(&self.shared);
            state.pending = Some(self.runtime.spawn(async move {
                sleep_until(deadline).await;
                if let Some(shared) = shared.upgrade() {
                    shared.commit(generation);
                }
            }));
            tracing::debug!(query = %state.raw_query, generation, "search query scheduled");
        }
        drop(state);
        self.shared.bump();
    }

    /// Replace the whole filter record. Takes effect immediately.
    pub fn set_filters(&self, filters: FilterCriteria) {
        let mut state = self.shared.state.lock();
        tracing::debug!(active = filters.active_count(), "filters replaced");
        state.filters = filters;
        drop(state);
        self.shared.bump();
    }

    /// Reset the query to empty and cancel any pending debounce. Filters stay.
    pub fn clear_search(&self) {
        let mut state = self.shared.state.lock();
        if state.cancel_pending() {
            tracing::debug!("pending search query cancelled");
        }
        state.raw_query.clear();
        state.effective_query.clear();
        drop(state);
        self.shared.bump();
    }

    /// Reset filters only; a query still inside its debounce window keeps going.
    pub fn clear_filters(&self) {
        self.shared.state.lock().filters = FilterCriteria::default();
        self.shared.bump();
    }

    pub fn clear_all(&self) {
        let mut state = self.shared.state.lock();
        if state.cancel_pending() {
            tracing::debug!("pending search query cancelled");
        }
        state.raw_query.clear();
        state.effective_query.clear();
        state.filters = FilterCriteria::default();
        drop(state);
        self.shared.bump();
    }

    /// Items matching the effective query and current filters, recomputed on
    /// every call.
    pub fn filtered_items(&self) -> Vec<&T> {
        let (query, filters) = {
            let state = self.shared.state.lock();
            (state.effective_query.clone(), state.filters.clone())
        };
        compute(self.items(), &query, &filters, &self.options)
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn result_count(&self) -> usize {
        self.filtered_items().len()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// The raw query as last typed.
    pub fn search_query(&self) -> String {
        self.shared.state.lock().raw_query.clone()
    }

    pub fn effective_query(&self) -> String {
        self.shared.state.lock().effective_query.clone()
    }

    pub fn filters(&self) -> FilterCriteria {
        self.shared.state.lock().filters.clone()
    }

    /// Facets over the full catalog, independent of query and filters.
    pub fn metadata(&self) -> SearchMetadata {
        extract_metadata(self.items())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.shared.state.lock();
        SessionSnapshot {
            search_query: state.raw_query.clone(),
            effective_query: state.effective_query.clone(),
            filters: state.filters.clone(),
            is_loading: state.pending.is_some(),
            revision: self.shared.revision(),
        }
    }

    /// Receives the revision counter, bumped on every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.subscribe()
    }

    /// Wait until no debounce timer is pending.
    pub async fn settled(&self) {
        let mut revisions = self.subscribe();
        while self.is_loading() {
            if revisions.changed().await.is_err() {
                break;
            }
        }
    }
}

impl<T> Drop for SearchSession<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.state.lock().pending.take() {
            handle.abort();
        }
    }
}
