mod common;

use axum::routing::get;
use axum::{Router, middleware};
use axum_test::TestServer;
use snip::api::handlers::{health_handler, metrics_handler};
use snip::api::middleware::metrics;
use snip::state::AppState;
use sqlx::SqlitePool;

fn make_server(pool: SqlitePool) -> (TestServer, AppState) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route(
            "/missing",
            get(|| async { axum::http::StatusCode::NOT_FOUND }),
        )
        .layer(middleware::from_fn_with_state(state.clone(), metrics::track))
        .with_state(state.clone());
    (TestServer::new(app).unwrap(), state)
}

#[sqlx::test]
async fn test_metrics_exposition_counts_requests(pool: SqlitePool) {
    let (server, _state) = make_server(pool);

    server.get("/health").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();
    server.get("/missing").await.assert_status_not_found();

    let response = server.get("/metrics").await;
    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("http_requests_total 3"));
    assert!(body.contains("http_errors_total 1"));
    assert!(body.contains("# TYPE http_requests_total counter"));
    assert!(body.contains("http_request_duration_p95_ms"));
}

#[sqlx::test]
async fn test_metrics_reset(pool: SqlitePool) {
    let (server, state) = make_server(pool);

    server.get("/health").await.assert_status_ok();
    state.metrics.reset();

    let body = server.get("/metrics").await.text();
    assert!(body.contains("http_requests_total 0"));
}
