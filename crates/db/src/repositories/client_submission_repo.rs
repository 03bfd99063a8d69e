//! Repository for the `client_submissions` table.
//!
//! Submissions hold contact details, so even reads use the writer tier.

use keystone_core::mapping::frontend_record;
use keystone_core::table::TableCategory;
use keystone_core::types::{DbId, Record};

use super::{normalize_all, prepare_write, RecordRepo};
use crate::error::DbError;
use crate::Database;

const CATEGORY: TableCategory = TableCategory::ClientSubmissions;

pub struct ClientSubmissionRepo;

impl ClientSubmissionRepo {
    /// All submissions, newest first, with legacy contact columns resolved.
    pub async fn list(db: &Database) -> Result<Vec<Record>, DbError> {
        let rows = RecordRepo::list_recent(db.writer(), CATEGORY).await?;
        tracing::debug!(count = rows.len(), "Fetched client submissions");
        Ok(normalize_all(rows, CATEGORY))
    }

    /// Store a contact-form submission.
    pub async fn create(db: &Database, input: &Record) -> Result<Record, DbError> {
        let row = RecordRepo::insert(db.writer(), CATEGORY, &prepare_write(input, CATEGORY)).await?;
        tracing::info!(submission_id = ?row.get("id"), "Client submission received");
        Ok(frontend_record(&row, CATEGORY))
    }

    pub async fn update(
        db: &Database,
        id: DbId,
        input: &Record,
    ) -> Result<Option<Record>, DbError> {
        let row =
            RecordRepo::update(db.writer(), CATEGORY, id, &prepare_write(input, CATEGORY)).await?;
        if row.is_some() {
            tracing::info!(submission_id = id, "Client submission updated");
        }
        Ok(row.map(|r| frontend_record(&r, CATEGORY)))
    }

    pub async fn delete(db: &Database, id: DbId) -> Result<bool, DbError> {
        let deleted = RecordRepo::delete(db.writer(), CATEGORY, id).await?;
        if deleted {
            tracing::info!(submission_id = id, "Client submission deleted");
        }
        Ok(deleted)
    }
}
