//! Axum router wiring.
//!
//! Route table: `/red` and `/blue` (GET reads, PUT increments), `/status`
//! (GET only). Everything else, including a wrong method on a known path,
//! falls through to the 404 handler.

use axum::{extract::State, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use redblue_core::Counter;

use crate::{app_state::AppState, handlers, middleware as mw};

pub fn build_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();

    for counter in Counter::ALL {
        let path = format!("/{counter}");
        router = router.route(
            &path,
            get(move |State(state): State<AppState>| async move {
                handlers::read_counter(&state, counter)
            })
            .put(move |State(state): State<AppState>| async move {
                handlers::bump_counter(&state, counter)
            })
            .fallback(handlers::not_found),
        );
    }

    let mut router = router
        .route("/status", get(handlers::status).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(mw::method_gate));

    for layer in mw::response_headers() {
        router = router.layer(layer);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
