use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use redblue_core::error::{RedBlueError, Result};
use redblue_core::CounterState;

use super::StateStore;

/// In-process store holding the raw serialized content, the way a file would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: Mutex<Option<String>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with raw content (not necessarily valid JSON).
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(content.into())),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::Relaxed);
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::Relaxed)
    }

    pub fn raw(&self) -> Option<String> {
        self.content.lock().clone()
    }

    /// Last saved state, if the content decodes.
    pub fn saved(&self) -> Option<CounterState> {
        self.raw().and_then(|s| CounterState::from_json(&s).ok())
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    fn describe(&self) -> String {
        "memory".into()
    }

    async fn load(&self) -> Result<CounterState> {
        let content = self
            .raw()
            .ok_or_else(|| RedBlueError::NotFound(self.describe()))?;
        CounterState::from_json(&content)
    }

    async fn save(&self, state: &CounterState) -> Result<()> {
        if self.fail_saves.load(Ordering::Relaxed) {
            return Err(RedBlueError::Internal("memory store rejects saves".into()));
        }
        let data = state.to_json()?;
        *self.content.lock() = Some(data);
        self.saves.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
