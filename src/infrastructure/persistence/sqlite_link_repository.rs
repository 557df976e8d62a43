//! SQLite implementation of the link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, original_url, short_code, click_count, created_at, updated_at";

/// SQLite repository for link storage and retrieval.
///
/// Every method issues a single statement; SQLite's statement-level
/// atomicity is what keeps the click counter correct under concurrent
/// redirects. Timestamps are assigned by the database (`datetime('now')`),
/// never by the application.
#[derive(Clone)]
pub struct SqliteLinkRepository {
    pool: SqlitePool,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn find_by_short_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE short_code = ?1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    async fn find_all(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let links = sqlx::query_as::<_, Link>(&format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY id DESC LIMIT ?1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(links)
    }

    async fn create(&self, original_url: &str, short_code: &str) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO links (original_url, short_code) VALUES (?1, ?2)")
            .bind(original_url)
            .bind(short_code)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_url(&self, id: i64, original_url: &str) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE links SET original_url = ?1, updated_at = datetime('now') WHERE id = ?2",
        )
        .bind(original_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_click_count(&self, id: i64) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE links SET click_count = click_count + 1, updated_at = datetime('now') \
             WHERE id = ?1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn short_code_exists(&self, code: &str) -> Result<bool, AppError> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM links WHERE short_code = ?1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id.is_some())
    }
}
