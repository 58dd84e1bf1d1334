use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Open an in-memory SQLite database with the schema applied.
///
/// The pool is capped at a single connection: every pooled connection to
/// `sqlite::memory:` gets its own database, so a second connection would see
/// an empty schema.
pub async fn setup_in_memory_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");

    pool
}
