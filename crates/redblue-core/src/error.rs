//! Shared error type across redblue crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RedBlueError>;

/// Unified error type used by core and server.
///
/// None of these reach an HTTP client: load and persist failures are logged
/// and recovered, and unknown routes are answered with a fixed 404 body.
#[derive(Debug, Error)]
pub enum RedBlueError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RedBlueError {
    /// Missing store is the normal first-run case, logged quieter than a
    /// corrupt one.
    pub fn is_not_found(&self) -> bool {
        match self {
            RedBlueError::NotFound(_) => true,
            RedBlueError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
