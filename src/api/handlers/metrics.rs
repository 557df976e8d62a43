//! Handler for the metrics endpoint.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

/// Exposes request metrics in Prometheus text exposition format.
///
/// # Endpoint
///
/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render_prometheus(),
    )
        .into_response()
}
