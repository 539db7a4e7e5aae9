//! Route handlers.

use axum::{extract::State, http::StatusCode, Json};

use redblue_core::protocol::{CounterBody, ErrorBody};
use redblue_core::{Counter, CounterState};

use crate::app_state::AppState;

pub fn read_counter(state: &AppState, counter: Counter) -> Json<CounterBody> {
    Json(CounterBody::new(counter, state.get(counter)))
}

/// Persistence is scheduled inside `AppState::increment`; the response does
/// not wait for it.
pub fn bump_counter(state: &AppState, counter: Counter) -> Json<CounterBody> {
    let value = state.increment(counter);
    tracing::debug!(%counter, value, "counter incremented");
    Json(CounterBody::new(counter, value))
}

pub async fn status(State(state): State<AppState>) -> Json<CounterState> {
    Json(state.snapshot())
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::page_not_found()))
}
