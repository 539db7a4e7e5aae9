//! Top-level facade crate for redblue.
//!
//! Re-exports the core model and the server library so users can depend on a
//! single crate.

pub mod core {
    pub use redblue_core::*;
}

pub mod server {
    pub use redblue_server::*;
}
