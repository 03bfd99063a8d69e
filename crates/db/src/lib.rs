//! Persistence access for the listing site.
//!
//! Rows are read as JSON objects and normalized to presentation shape on the
//! way out; writes are coerced and renamed to column shape on the way in.
//! Reads go through the restricted reader pool, writes through the writer
//! pool (see [`Database`]).

pub mod config;
pub mod database;
pub mod error;
pub mod query;
pub mod repositories;

pub use config::DbConfig;
pub use database::Database;
pub use error::DbError;

pub type DbPool = sqlx::PgPool;

/// Verify the pool can reach the database.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
