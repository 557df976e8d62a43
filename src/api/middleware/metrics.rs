//! Request metrics recording middleware.

use axum::{extract::{Request, State}, middleware::Next, response::Response};
use std::time::Instant;

use crate::state::AppState;

/// Records latency and error outcome for every request.
///
/// Any 4xx or 5xx response counts as an error. The collector lives in
/// [`AppState`], so tests can inspect and reset it.
pub async fn track(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let is_error = status.is_client_error() || status.is_server_error();
    state.metrics.record_request(started.elapsed(), is_error);

    response
}
