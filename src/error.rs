//! Application error type and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error kinds surfaced by the core.
///
/// The boundary layer decides the transport representation: validation
/// failures become 400, missing records 404, and storage problems a
/// generic 500 that never leaks driver details to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input (caller responds 400).
    #[error("{0}")]
    Validation(String),

    /// An id or code did not resolve (caller responds 404).
    #[error("{0}")]
    NotFound(String),

    /// Short-code collision at insert time. The service retries this
    /// with a fresh code before it ever reaches a client.
    #[error("{0}")]
    Conflict(String),

    /// The unique-code generation loop exceeded its retry bound.
    #[error("gave up generating a unique short code after {attempts} attempts")]
    Exhausted { attempts: u32 },

    /// Underlying persistence error.
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict("Short code already exists");
            }
        }

        AppError::Storage(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            AppError::Exhausted { .. } => {
                tracing::error!(error = %self, "short code generation exhausted");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = AppError::validation("Invalid URL. Must start with http or https");
        assert_eq!(
            err.to_string(),
            "Invalid URL. Must start with http or https"
        );
    }

    #[test]
    fn test_exhausted_error_display() {
        let err = AppError::Exhausted { attempts: 10 };
        assert!(err.to_string().contains("10 attempts"));
    }

    #[test]
    fn test_row_not_found_maps_to_storage() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Storage(_)));
    }
}
