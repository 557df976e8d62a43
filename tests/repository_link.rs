mod common;

use snip::domain::repositories::LinkRepository;
use snip::error::AppError;
use snip::infrastructure::persistence::SqliteLinkRepository;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_create_and_find_by_id(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(pool);

    let id = repo.create("https://example.com", "abc123").await.unwrap();

    let link = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(link.id, id);
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.short_code, "abc123");
    assert_eq!(link.click_count, 0);
}

#[sqlx::test]
async fn test_find_by_short_code(pool: SqlitePool) {
    common::create_test_link(&pool, "xyz789", "https://example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    let link = repo.find_by_short_code("xyz789").await.unwrap();
    assert_eq!(link.unwrap().short_code, "xyz789");

    let missing = repo.find_by_short_code("nothere").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_ids_are_monotonic(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(pool);

    let first = repo.create("https://a.com", "aaaa01").await.unwrap();
    let second = repo.create("https://b.com", "bbbb02").await.unwrap();

    assert!(second > first);
}

#[sqlx::test]
async fn test_duplicate_short_code_is_conflict(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(pool);

    repo.create("https://a.com", "dup001").await.unwrap();
    let result = repo.create("https://b.com", "dup001").await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[sqlx::test]
async fn test_find_all_newest_first_with_limit(pool: SqlitePool) {
    common::create_test_link(&pool, "code01", "https://a.com").await;
    common::create_test_link(&pool, "code02", "https://b.com").await;
    common::create_test_link(&pool, "code03", "https://c.com").await;

    let repo = SqliteLinkRepository::new(pool);

    let links = repo.find_all(2).await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].short_code, "code03");
    assert_eq!(links[1].short_code, "code02");

    let all = repo.find_all(50).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[sqlx::test]
async fn test_update_url(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "upd001", "https://old.com").await;
    let repo = SqliteLinkRepository::new(pool);

    let affected = repo.update_url(id, "https://new.com").await.unwrap();
    assert!(affected);

    let link = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(link.original_url, "https://new.com");
    assert!(link.updated_at >= link.created_at);
}

#[sqlx::test]
async fn test_update_url_missing_id(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(pool);

    let affected = repo.update_url(999, "https://new.com").await.unwrap();
    assert!(!affected);
}

#[sqlx::test]
async fn test_increment_click_count(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "clk001", "https://example.com").await;
    let repo = SqliteLinkRepository::new(pool.clone());

    for _ in 0..5 {
        repo.increment_click_count(id).await.unwrap();
    }

    assert_eq!(common::click_count(&pool, "clk001").await, 5);
}

#[sqlx::test]
async fn test_concurrent_increments_lose_no_updates(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "hot001", "https://example.com").await;
    let repo = SqliteLinkRepository::new(pool.clone());

    let mut handles = Vec::new();
    for _ in 0..20 {
        let repo = repo.clone();
        handles.push(tokio::spawn(
            async move { repo.increment_click_count(id).await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(common::click_count(&pool, "hot001").await, 20);
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "del001", "https://example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    // Second delete affects nothing.
    assert!(!repo.delete(id).await.unwrap());
}

#[sqlx::test]
async fn test_short_code_exists(pool: SqlitePool) {
    common::create_test_link(&pool, "exs001", "https://example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    assert!(repo.short_code_exists("exs001").await.unwrap());
    assert!(!repo.short_code_exists("free01").await.unwrap());
}
