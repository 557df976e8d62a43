//! Repository trait for short link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Every operation maps to a single atomic statement against the
/// persistence substrate. The repository is the only component that
/// touches durable storage; business rules live in the service layer.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Lists links newest-first by id, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_all(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Inserts a new link and returns its server-assigned id.
    ///
    /// The row starts with `click_count = 0` and server-assigned
    /// timestamps. The `short_code` column carries a UNIQUE constraint;
    /// callers avoid collisions with a generate-and-check loop, but the
    /// constraint is what makes uniqueness authoritative.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_code` already exists.
    /// Returns [`AppError::Storage`] on other database errors.
    async fn create(&self, original_url: &str, short_code: &str) -> Result<i64, AppError>;

    /// Updates the destination URL and refreshes `updated_at`.
    ///
    /// Returns whether a row was affected (`false` if `id` is absent).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn update_url(&self, id: i64, original_url: &str) -> Result<bool, AppError>;

    /// Atomically increments the click counter and refreshes `updated_at`.
    ///
    /// Executed as a single `UPDATE ... SET click_count = click_count + 1`
    /// statement so that concurrent redirects for the same code never
    /// lose updates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_click_count(&self, id: i64) -> Result<(), AppError>;

    /// Permanently removes a link.
    ///
    /// Returns whether a row was affected (`false` if `id` is absent).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Returns whether a short code is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn short_code_exists(&self, code: &str) -> Result<bool, AppError>;
}
