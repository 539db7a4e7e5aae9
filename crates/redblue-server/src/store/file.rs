use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use redblue_core::error::{RedBlueError, Result};
use redblue_core::CounterState;

use super::StateStore;

/// JSON file store. Each save truncates and rewrites the file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for FileStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<CounterState> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RedBlueError::NotFound(self.describe()),
                _ => RedBlueError::Io(e),
            })?;
        CounterState::from_json(&data)
    }

    async fn save(&self, state: &CounterState) -> Result<()> {
        let data = state.to_json()?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}
