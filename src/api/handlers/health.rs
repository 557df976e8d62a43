//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{SecondsFormat, Utc};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// Probes the persistence substrate directly rather than going through
/// the link service, so a broken service wiring cannot mask a healthy
/// database or vice versa.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all checks pass
/// - **503 Service Unavailable**: one or more checks failed
///
/// # Components Checked
///
/// 1. **Database**: `SELECT 1` connectivity probe
/// 2. **Schema**: the `links` table exists
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;
    let schema_check = check_schema(&state).await;

    let all_healthy = db_check.status == "ok" && schema_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "unhealthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        checks: HealthChecks {
            database: db_check,
            schema: schema_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks database connectivity.
async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Database error: {}", e)),
        },
    }
}

/// Checks that the links table exists.
async fn check_schema(state: &AppState) -> CheckStatus {
    let result = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'links'",
    )
    .fetch_optional(&state.db)
    .await;

    match result {
        Ok(Some(_)) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Ok(None) => CheckStatus {
            status: "error".to_string(),
            message: Some("links table not found".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Schema check error: {}", e)),
        },
    }
}
