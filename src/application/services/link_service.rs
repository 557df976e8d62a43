//! Link lifecycle orchestration.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{SHORT_CODE_LENGTH, generate_code};
use crate::utils::url_validator::validate_url;

/// Default cap for link listings.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Service for the link lifecycle: create, read, update, delete, redirect.
///
/// Pure orchestration over a [`LinkRepository`]; holds no cached copies
/// between calls, so every read observes the authoritative stored state.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(repository: Arc<L>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `original_url`.
    ///
    /// Validates the URL, generates a collision-free short code, inserts
    /// the record, and re-fetches it so the caller sees server-assigned
    /// timestamps.
    ///
    /// # Collision handling
    ///
    /// The generate-and-check loop avoids collisions in the common case,
    /// but the UNIQUE constraint on `short_code` is authoritative: if a
    /// concurrent insert wins the race between check and insert, the
    /// resulting [`AppError::Conflict`] is retried once with a fresh code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an invalid URL,
    /// [`AppError::Exhausted`] if no free code is found, and propagates
    /// store failures.
    pub async fn create_link(&self, original_url: &str) -> Result<Link, AppError> {
        validate_url(original_url)?;
        let url = original_url.trim();

        let code = self.generate_unique_code().await?;

        let id = match self.repository.create(url, &code).await {
            Ok(id) => id,
            Err(AppError::Conflict(_)) => {
                let code = self.generate_unique_code().await?;
                self.repository.create(url, &code).await?
            }
            Err(e) => return Err(e),
        };

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::Storage(sqlx::Error::RowNotFound))
    }

    /// Retrieves a link by id, or `None` if it does not exist.
    pub async fn get_link(&self, id: i64) -> Result<Option<Link>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists links newest-first, capped at `limit`.
    pub async fn get_all_links(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.repository.find_all(limit).await
    }

    /// Updates the destination URL of a link.
    ///
    /// An absent, empty, or whitespace-only `original_url` is treated as
    /// "no change": the record is re-fetched and returned untouched.
    /// (Inherited API behavior; an explicit omitted-field marker would be
    /// the sharper design if these semantics ever need to distinguish
    /// "absent" from "empty".)
    ///
    /// Always returns the current stored state, or `None` if the id does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a non-empty URL fails
    /// validation; propagates store failures.
    pub async fn update_link(
        &self,
        id: i64,
        original_url: Option<&str>,
    ) -> Result<Option<Link>, AppError> {
        if let Some(url) = original_url {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                self.repository.update_url(id, trimmed).await?;
            }
        }

        self.repository.find_by_id(id).await
    }

    /// Permanently deletes a link. Returns whether a row was removed.
    pub async fn delete_link(&self, id: i64) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }

    /// Resolves a short code for redirection.
    ///
    /// On a hit, the click counter is incremented (once per call, no
    /// deduplication) before the destination URL is returned. `None`
    /// means the code does not resolve.
    pub async fn redirect(&self, code: &str) -> Result<Option<String>, AppError> {
        let Some(link) = self.repository.find_by_short_code(code).await? else {
            return Ok(None);
        };

        self.repository.increment_click_count(link.id).await?;

        Ok(Some(link.original_url))
    }

    /// Generates a short code that is unused at check time.
    ///
    /// Collisions among 62^6 codes are negligible, but an unbounded loop
    /// is an availability risk: after 10 attempts the loop fails with
    /// [`AppError::Exhausted`].
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: u32 = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code(SHORT_CODE_LENGTH)?;

            if !self.repository.short_code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::Exhausted {
            attempts: MAX_ATTEMPTS,
        })
    }
}
