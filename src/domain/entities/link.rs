//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with its click counter and timestamps.
///
/// This is the sole persistent entity of the service. The `short_code` is
/// unique across all links and immutable after creation; `click_count`
/// only ever grows.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
            created_at,
            updated_at,
        }
    }

    /// Returns true if the link has never been visited.
    pub fn is_unvisited(&self) -> bool {
        self.click_count == 0
    }
}
