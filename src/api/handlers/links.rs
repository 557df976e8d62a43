//! Handlers for link management endpoints (list, create, read, update, delete).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::link::{
    CreateLinkRequest, DeleteResponse, LinkResponse, ListLinksQuery, UpdateLinkRequest,
};
use crate::application::services::link_service::DEFAULT_LIST_LIMIT;
use crate::error::AppError;
use crate::state::AppState;

/// Lists links, newest first.
///
/// # Endpoint
///
/// `GET /api/links?limit=50`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(query): Query<ListLinksQuery>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT).max(1);

    let links = state.link_service.get_all_links(limit).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links` with body `{"original_url": "https://..."}`
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "..."}` if the URL fails
/// validation.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state.link_service.create_link(&payload.original_url).await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Fetches a single link by id.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .get_link(id)
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;

    Ok(Json(link.into()))
}

/// Updates the destination URL of a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}` with body `{"original_url": "https://..."}`.
/// An absent or empty `original_url` is a no-op touch; the current
/// record is returned either way.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL, 404 Not Found for an
/// unknown id.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .update_link(id, payload.original_url.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;

    Ok(Json(link.into()))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id does not resolve.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.link_service.delete_link(id).await?;

    if !deleted {
        return Err(AppError::not_found("Not found"));
    }

    Ok(Json(DeleteResponse { ok: true }))
}
