//! Best-effort persistence task.
//!
//! Handlers hand snapshots to a single writer task over an unbounded channel
//! and return immediately. The writer saves them in order. A failed save goes
//! to the failure hook and is never retried; the client that triggered it is
//! not told.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use redblue_core::error::{RedBlueError, Result};
use redblue_core::CounterState;

use super::StateStore;

/// Called with the snapshot that failed to save and the error.
pub type FailureHook = Arc<dyn Fn(&CounterState, &RedBlueError) + Send + Sync>;

enum Command {
    Save(CounterState),
    Flush(oneshot::Sender<()>),
}

pub struct Persister;

impl Persister {
    /// Spawn the writer task on the current runtime. Failures are logged.
    pub fn spawn(store: Arc<dyn StateStore>) -> PersistHandle {
        let described = store.describe();
        let hook: FailureHook = Arc::new(move |state: &CounterState, err: &RedBlueError| {
            tracing::error!(
                store = %described,
                red = state.red,
                blue = state.blue,
                error = %err,
                "persist failed"
            );
        });
        Self::spawn_with_hook(store, hook)
    }

    pub fn spawn_with_hook(store: Arc<dyn StateStore>, on_failure: FailureHook) -> PersistHandle {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run(store, rx, on_failure));
        PersistHandle { tx }
    }
}

async fn run(
    store: Arc<dyn StateStore>,
    mut rx: mpsc::UnboundedReceiver<Command>,
    on_failure: FailureHook,
) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            Command::Save(state) => {
                if let Err(e) = store.save(&state).await {
                    on_failure(&state, &e);
                } else {
                    tracing::trace!(red = state.red, blue = state.blue, "state persisted");
                }
            }
            Command::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    tracing::debug!(store = %store.describe(), "persister stopped");
}

/// Sending side of the persister. Cheap to clone.
#[derive(Clone)]
pub struct PersistHandle {
    tx: mpsc::UnboundedSender<Command>,
}

impl PersistHandle {
    /// Enqueue a full-state save without waiting for it.
    pub fn schedule(&self, state: CounterState) {
        if self.tx.send(Command::Save(state)).is_err() {
            tracing::error!(red = state.red, blue = state.blue, "persister gone, snapshot dropped");
        }
    }

    /// Resolve once every snapshot scheduled before this call was attempted.
    pub async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.tx
            .send(Command::Flush(ack_tx))
            .map_err(|_| RedBlueError::Internal("persister gone".into()))?;
        ack_rx
            .await
            .map_err(|_| RedBlueError::Internal("persister stopped before flush".into()))
    }
}
