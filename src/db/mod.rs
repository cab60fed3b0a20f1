//! Database layer: pool, schema, and the user repository for PostgreSQL.

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

mod users;

pub use users::*;

pub type DbPool = sqlx::PgPool;

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Ensure the `users` table exists. Runs at startup, before the server
/// accepts requests.
///
/// `email` carries no unique index: two registrations with the same
/// address both land as separate rows with distinct ids.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
