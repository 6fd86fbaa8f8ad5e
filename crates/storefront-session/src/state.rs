use parking_lot::Mutex;
use storefront_core::types::FilterCriteria;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Point-in-time copy of a session's observable state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// What the caller last typed.
    pub search_query: String,
    /// The query currently applied to results.
    pub effective_query: String,
    pub filters: FilterCriteria,
    pub is_loading: bool,
    pub revision: u64,
}

#[derive(Default)]
pub(crate) struct SessionState {
    pub(crate) raw_query: String,
    pub(crate) effective_query: String,
    pub(crate) filters: FilterCriteria,
    /// Bumped on every reschedule or cancellation; a timer only commits if
    /// the generation it was scheduled with is still current.
    pub(crate) generation: u64,
    pub(crate) pending: Option<JoinHandle<()>>,
}

impl SessionState {
    /// Invalidate and abort the pending debounce timer, if any.
    pub(crate) fn cancel_pending(&mut self) -> bool {
        self.generation += 1;
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

pub(crate) struct Shared {
    pub(crate) state: Mutex<SessionState>,
    revision: watch::Sender<u64>,
}

impl Shared {
    pub(crate) fn new() -> Self {
        let (revision, _) = watch::channel(0);
        Self { state: Mutex::new(SessionState::default()), revision }
    }

    pub(crate) fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    pub(crate) fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Timer callback: promote the raw query unless a newer edit or a clear
    /// superseded this timer.
    pub(crate) fn commit(&self, generation: u64) {
        let mut state = self.state.lock();
        if state.generation != generation {
            tracing::trace!(generation, current = state.generation, "dropping superseded debounce timer");
            return;
        }
        state.effective_query = state.raw_query.clone();
        state.pending = None;
        tracing::debug!(query = %state.effective_query, "search query committed");
        drop(state);
        self.bump();
    }
}
