//! redblue server library entry.
//!
//! Wires the config loader, state store, persister, and axum router into the
//! counter service. Consumed by the binary (`main.rs`) and by integration
//! tests, which drive the router directly without opening a socket.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod store;
