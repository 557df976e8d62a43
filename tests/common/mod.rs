#![allow(dead_code)]

use snip::state::AppState;
use sqlx::SqlitePool;

/// Inserts a link row directly, returning its id.
pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query("INSERT INTO links (original_url, short_code) VALUES (?1, ?2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

/// Reads the stored click counter for a code.
pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool)
}
