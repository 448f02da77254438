//! # peek-controller
//!
//! Lifecycle of comparison requests.
//!
//! [`RequestController`] tracks one logical request at a time. Every
//! submission gets a fresh [`RequestId`]; a completion is applied only if its
//! id is still the current one, so a slow earlier request can never overwrite
//! the outcome of a later one. Superseded fetches are not cancelled, their
//! results are dropped on arrival.
//!
//! Observers follow state changes through a `tokio::sync::watch` channel
//! ([`RequestController::subscribe`]). The id comparison and the transition it
//! gates run under the channel's lock, so the controller may be shared across
//! threads.

mod outcome;

pub use outcome::classify;

use std::sync::Arc;

use peek_core::{
    ComparisonResponse, ComparisonSource, FetchError, RequestId, RequestState, SearchQuery,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// The current request id and its state, as published to observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracked {
    pub id: RequestId,
    pub state: RequestState,
}

/// Observer handle; `changed().await` wakes on every transition.
pub type StateReceiver = watch::Receiver<Tracked>;

/// A submission that has moved the controller to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub query: SearchQuery,
}

struct Shared {
    state: watch::Sender<Tracked>,
}

impl Shared {
    fn resolve(&self, id: RequestId, outcome: Result<ComparisonResponse, FetchError>) -> bool {
        let next = classify(outcome);
        let applied = self.state.send_if_modified(|tracked| {
            if tracked.id != id || !tracked.state.is_loading() {
                return false;
            }
            tracked.state = next;
            true
        });

        if applied {
            tracing::debug!(%id, "comparison request resolved");
        } else {
            tracing::debug!(%id, "discarding stale comparison result");
        }
        applied
    }
}

/// Owns the single live [`RequestState`] and drives fetches through `S`.
pub struct RequestController<S> {
    source: Arc<S>,
    shared: Arc<Shared>,
}

impl<S> Clone for RequestController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: ComparisonSource> RequestController<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(Tracked::default());
        Self {
            source: Arc::new(source),
            shared: Arc::new(Shared { state }),
        }
    }

    /// Follow every state change from now on.
    #[must_use]
    pub fn subscribe(&self) -> StateReceiver {
        self.shared.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> RequestState {
        self.shared.state.borrow().state.clone()
    }

    /// Id of the most recent submission (`req-0` before the first).
    #[must_use]
    pub fn current_id(&self) -> RequestId {
        self.shared.state.borrow().id
    }

    /// Submit raw user input.
    ///
    /// Blank input is ignored: `None`, no transition, no fetch. Otherwise the
    /// state is `Loading` when this returns and a task is spawned on the
    /// current tokio runtime that fetches and resolves. The handle may be
    /// dropped; the task runs to completion either way.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn submit(&self, raw: &str) -> Option<JoinHandle<()>> {
        let pending = self.begin(raw)?;
        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);

        Some(tokio::spawn(async move {
            let outcome = source.fetch(&pending.query).await;
            shared.resolve(pending.id, outcome);
        }))
    }

    /// Synchronous half of [`Self::submit`]: validate and enter `Loading`.
    ///
    /// Returns `None` for blank input without touching the state.
    pub fn begin(&self, raw: &str) -> Option<PendingRequest> {
        let query = SearchQuery::parse(raw)?;
        let mut id = RequestId::default();
        self.shared.state.send_modify(|tracked| {
            id = tracked.id.next();
            *tracked = Tracked {
                id,
                state: RequestState::Loading {
                    query: query.clone(),
                },
            };
        });

        tracing::debug!(%id, %query, "comparison request started");
        Some(PendingRequest { id, query })
    }

    /// Apply the outcome of request `id`.
    ///
    /// Returns `false`, leaving the state untouched, when `id` has been
    /// superseded or already resolved.
    pub fn resolve(&self, id: RequestId, outcome: Result<ComparisonResponse, FetchError>) -> bool {
        self.shared.resolve(id, outcome)
    }
}
