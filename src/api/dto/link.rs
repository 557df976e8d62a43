//! DTOs for the link CRUD endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub original_url: String,
}

/// Request body for `PUT /api/links/{id}`.
///
/// An absent or empty `original_url` leaves the link unchanged; the
/// current record is still returned.
#[derive(Debug, Deserialize)]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub original_url: Option<String>,
}

/// Query parameters for `GET /api/links`.
#[derive(Debug, Deserialize)]
pub struct ListLinksQuery {
    pub limit: Option<i64>,
}

/// Canonical JSON representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            click_count: link.click_count,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

/// Response body for `DELETE /api/links/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}
