//! Reader/writer pool pair.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::config::DbConfig;
use crate::error::DbError;
use crate::DbPool;

/// Connection pools for both credential tiers.
///
/// Constructing a `Database` is the only place connection settings are
/// checked; every repository call can assume the pools exist. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Database {
    reader: DbPool,
    writer: DbPool,
}

impl Database {
    /// Build both pools without opening a connection.
    ///
    /// Fails with [`DbError::Unconfigured`] when no reader URL is set, and
    /// with [`DbError::Sqlx`] when a URL cannot be parsed.
    pub fn connect_lazy(config: &DbConfig) -> Result<Self, DbError> {
        let reader_url = non_blank(config.reader_url.as_deref()).ok_or_else(|| {
            DbError::Unconfigured("DATABASE_READER_URL (or DATABASE_URL) is not set".into())
        })?;

        let writer_url = match non_blank(config.writer_url.as_deref()) {
            Some(url) => url,
            None => {
                tracing::warn!("No writer URL configured, writes will use the reader credentials");
                reader_url
            }
        };

        let reader = pool_options(config).connect_lazy(reader_url)?;
        let writer = pool_options(config).connect_lazy(writer_url)?;

        tracing::info!(
            max_connections = config.max_connections,
            acquire_timeout_secs = config.acquire_timeout_secs,
            "Database pools created",
        );

        Ok(Self { reader, writer })
    }

    /// Pool for public reads.
    pub fn reader(&self) -> &DbPool {
        &self.reader
    }

    /// Pool for admin reads and all writes.
    pub fn writer(&self) -> &DbPool {
        &self.writer
    }

    /// Ping both tiers.
    pub async fn health_check(&self) -> Result<(), DbError> {
        crate::health_check(&self.reader).await?;
        crate::health_check(&self.writer).await?;
        Ok(())
    }
}

fn pool_options(config: &DbConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs.max(1)))
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty())
}
