//! Backing store for the counters.
//!
//! A store is a passive mirror of the in-memory state: read once at startup,
//! overwritten after each increment by the [`Persister`]. There is no locking,
//! so two processes sharing one file race and the last write wins.

pub mod file;
pub mod memory;
pub mod persister;

use async_trait::async_trait;

use redblue_core::error::Result;
use redblue_core::CounterState;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persister::{PersistHandle, Persister};

#[async_trait]
pub trait StateStore: Send + Sync {
    /// Human-readable location, used in log fields.
    fn describe(&self) -> String;
    async fn load(&self) -> Result<CounterState>;
    /// Overwrite the whole store with `state`.
    async fn save(&self, state: &CounterState) -> Result<()>;
}

/// Startup policy: any load failure falls back to zero state.
pub async fn load_or_default(store: &dyn StateStore) -> CounterState {
    match store.load().await {
        Ok(state) => {
            tracing::info!(store = %store.describe(), red = state.red, blue = state.blue, "counter state loaded");
            state
        }
        Err(e) if e.is_not_found() => {
            tracing::info!(store = %store.describe(), "no stored state, starting from zero");
            CounterState::default()
        }
        Err(e) => {
            tracing::warn!(store = %store.describe(), error = %e, "stored state unreadable, starting from zero");
            CounterState::default()
        }
    }
}
