//! Table-agnostic access to JSON-shaped rows.
//!
//! Returns rows exactly as stored (column names); the typed repositories
//! normalize them.

use keystone_core::table::TableCategory;
use keystone_core::types::{DbId, Record};
use sqlx::types::Json;

use crate::error::DbError;
use crate::{query, DbPool};

/// Zero-sized repository over any [`TableCategory`].
pub struct RecordRepo;

impl RecordRepo {
    /// All rows, newest first.
    pub async fn list_recent(
        pool: &DbPool,
        category: TableCategory,
    ) -> Result<Vec<Record>, DbError> {
        let rows = sqlx::query_scalar::<_, Json<Record>>(&query::select_recent(category))
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|Json(r)| r).collect())
    }

    /// Rows whose text column `field` equals `value`, newest first.
    pub async fn list_where_eq(
        pool: &DbPool,
        category: TableCategory,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, DbError> {
        let sql = query::select_where_eq(category, field)?;
        let rows = sqlx::query_scalar::<_, Json<Record>>(&sql)
            .bind(value)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|Json(r)| r).collect())
    }

    /// Rows whose boolean column `field` is true, newest first.
    pub async fn list_where_true(
        pool: &DbPool,
        category: TableCategory,
        field: &str,
    ) -> Result<Vec<Record>, DbError> {
        let sql = query::select_where_true(category, field)?;
        let rows = sqlx::query_scalar::<_, Json<Record>>(&sql)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|Json(r)| r).collect())
    }

    pub async fn find_by_id(
        pool: &DbPool,
        category: TableCategory,
        id: DbId,
    ) -> Result<Option<Record>, DbError> {
        let row = sqlx::query_scalar::<_, Json<Record>>(&query::select_by_id(category))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|Json(r)| r))
    }

    /// Most recent row whose text column `field` equals `value`.
    pub async fn find_where_eq(
        pool: &DbPool,
        category: TableCategory,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>, DbError> {
        let sql = format!("{} LIMIT 1", query::select_where_eq(category, field)?);
        let row = sqlx::query_scalar::<_, Json<Record>>(&sql)
            .bind(value)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|Json(r)| r))
    }

    /// Insert a column-shaped record and return the stored row.
    pub async fn insert(
        pool: &DbPool,
        category: TableCategory,
        record: &Record,
    ) -> Result<Record, DbError> {
        let sql = query::insert(category, record)?;
        let Json(row) = sqlx::query_scalar::<_, Json<Record>>(&sql)
            .bind(Json(record))
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Update the columns present in `record`. Returns `None` if no row has `id`.
    pub async fn update(
        pool: &DbPool,
        category: TableCategory,
        id: DbId,
        record: &Record,
    ) -> Result<Option<Record>, DbError> {
        let sql = query::update(category, record)?;
        let row = sqlx::query_scalar::<_, Json<Record>>(&sql)
            .bind(Json(record))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(|Json(r)| r))
    }

    /// Delete a row by id. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &DbPool,
        category: TableCategory,
        id: DbId,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(&query::delete(category))
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
