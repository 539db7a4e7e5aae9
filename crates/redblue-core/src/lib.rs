//! redblue core: counter model, wire bodies, and the shared error type.
//!
//! This crate carries no transport or runtime dependencies. The server crate
//! owns HTTP, storage I/O, and the async runtime.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `RedBlueError`/`Result` so bad store content or bad requests
//! never crash the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod protocol;

pub use counter::{Counter, CounterState};
/// Shared result type.
pub use error::{RedBlueError, Result};
