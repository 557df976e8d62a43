//! Handler for short URL redirect, the hot path.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` where code matches `[A-Za-z0-9_-]{4,32}`
///
/// # Request Flow
///
/// 1. Structural validity check (no store access)
/// 2. Lookup by code; on a hit the click counter is incremented
///    atomically before the response is built
/// 3. 302 Found with `Location`, or plain-text 404
///
/// The increment happens on every successful lookup, including rapid
/// repeats for the same code; there is no deduplication.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    if !is_valid_code(&code) {
        return not_found();
    }

    match state.link_service.redirect(&code).await {
        Ok(Some(url)) => (StatusCode::FOUND, [(header::LOCATION, url)]).into_response(),
        Ok(None) => not_found(),
        Err(e) => e.into_response(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}
