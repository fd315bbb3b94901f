// Common test utilities

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Connect to a fresh in-memory SQLite database with migrations applied.
///
/// Capped at one connection: each `sqlite::memory:` connection is its own
/// database, so the pool must reuse a single connection for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
