//! Repository for the `properties` table.

use keystone_core::mapping::frontend_record;
use keystone_core::table::TableCategory;
use keystone_core::types::{DbId, Record};

use super::{normalize_all, prepare_write, RecordRepo};
use crate::error::DbError;
use crate::Database;

const CATEGORY: TableCategory = TableCategory::Properties;

/// Property listings. Reads use the reader tier, writes the writer tier.
pub struct PropertyRepo;

impl PropertyRepo {
    /// All listings, newest first.
    pub async fn list(db: &Database) -> Result<Vec<Record>, DbError> {
        let rows = RecordRepo::list_recent(db.reader(), CATEGORY).await?;
        tracing::debug!(count = rows.len(), "Fetched properties");
        Ok(normalize_all(rows, CATEGORY))
    }

    pub async fn find_by_id(db: &Database, id: DbId) -> Result<Option<Record>, DbError> {
        let row = RecordRepo::find_by_id(db.reader(), CATEGORY, id).await?;
        Ok(row.map(|r| frontend_record(&r, CATEGORY)))
    }

    /// Create a listing from form input.
    pub async fn create(db: &Database, input: &Record) -> Result<Record, DbError> {
        let row = RecordRepo::insert(db.writer(), CATEGORY, &prepare_write(input, CATEGORY)).await?;
        tracing::info!(property_id = ?row.get("id"), "Property created");
        Ok(frontend_record(&row, CATEGORY))
    }

    /// Update a listing from form input.
    ///
    /// The admin form submits whole records: missing numeric fields are
    /// written as their defaults (`0` price/area, `null` counts).
    pub async fn update(
        db: &Database,
        id: DbId,
        input: &Record,
    ) -> Result<Option<Record>, DbError> {
        let row =
            RecordRepo::update(db.writer(), CATEGORY, id, &prepare_write(input, CATEGORY)).await?;
        if row.is_some() {
            tracing::info!(property_id = id, "Property updated");
        }
        Ok(row.map(|r| frontend_record(&r, CATEGORY)))
    }

    pub async fn delete(db: &Database, id: DbId) -> Result<bool, DbError> {
        let deleted = RecordRepo::delete(db.writer(), CATEGORY, id).await?;
        if deleted {
            tracing::info!(property_id = id, "Property deleted");
        }
        Ok(deleted)
    }
}
