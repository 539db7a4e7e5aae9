//! Shared application state.
//!
//! Owns the in-memory counters and the persister handle. Built explicitly and
//! passed to the router, so tests can run it against a `MemoryStore`.

use std::sync::Arc;

use parking_lot::Mutex;

use redblue_core::{Counter, CounterState};

use crate::store::{self, PersistHandle, Persister, StateStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    counters: Mutex<CounterState>,
    persister: PersistHandle,
}

impl AppState {
    pub fn new(initial: CounterState, persister: PersistHandle) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                counters: Mutex::new(initial),
                persister,
            }),
        }
    }

    /// Load from `store` (zeros on failure) and start its persister.
    /// Must run inside a tokio runtime.
    pub async fn bootstrap(store: Arc<dyn StateStore>) -> Self {
        let initial = store::load_or_default(store.as_ref()).await;
        let persister = Persister::spawn(store);
        Self::new(initial, persister)
    }

    pub fn snapshot(&self) -> CounterState {
        *self.inner.counters.lock()
    }

    pub fn get(&self, counter: Counter) -> u64 {
        self.inner.counters.lock().get(counter)
    }

    /// Increment and schedule a persist of the full state.
    ///
    /// The snapshot is enqueued while the lock is held, so the persister sees
    /// snapshots in increment order.
    pub fn increment(&self, counter: Counter) -> u64 {
        let mut counters = self.inner.counters.lock();
        let value = counters.increment(counter);
        self.inner.persister.schedule(*counters);
        value
    }

    pub fn persister(&self) -> &PersistHandle {
        &self.inner.persister
    }
}
