//! redblue counter service.
//!
//! - `GET /red`, `GET /blue`, `GET /status`: read counters
//! - `PUT /red`, `PUT /blue`: increment, persisted best-effort to `./status`
//! - `OPTIONS *`: pre-flight acknowledgment

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use redblue_core::error::{RedBlueError, Result};
use redblue_server::{app_state::AppState, config, router, store::FileStore};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "redblue-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_or_default(config::DEFAULT_CONFIG_PATH)?;
    let listen = cfg.server.listen_addr()?;

    let store = Arc::new(FileStore::new(cfg.store.path.clone()));
    let store_path = store.path().display().to_string();
    let state = AppState::bootstrap(store).await;
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| RedBlueError::Internal(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, store = %store_path, "redblue-server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RedBlueError::Internal(format!("server failed: {e}")))?;

    // Pending snapshots reach the store before exit.
    state.persister().flush().await?;
    tracing::info!("redblue-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
