//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{code}`   - Short link redirect (hot path)
//! - `GET /health`   - Health check: DB connectivity and schema
//! - `GET /metrics`  - Prometheus metrics
//! - `/api/*`        - Link CRUD API
//! - `/`, assets     - Static front page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Metrics** - Request count / error count / latency recording
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, metrics_handler, redirect_handler};
use crate::api::middleware::{metrics, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api::routes::api_routes())
        .fallback_service(ServeDir::new("static"))
        .layer(middleware::from_fn_with_state(state.clone(), metrics::track))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
