//! Repository for the `page_content` table (editable page sections).

use keystone_core::fields::backend;
use keystone_core::mapping::frontend_record;
use keystone_core::table::TableCategory;
use keystone_core::types::Record;
use sqlx::types::Json;

use super::{normalize_all, RecordRepo};
use crate::error::DbError;
use crate::Database;

const CATEGORY: TableCategory = TableCategory::PageContent;

pub struct PageContentRepo;

impl PageContentRepo {
    /// Every section of `page_name`, most recently created first.
    pub async fn list_page(db: &Database, page_name: &str) -> Result<Vec<Record>, DbError> {
        let rows =
            RecordRepo::list_where_eq(db.reader(), CATEGORY, backend::PAGE_NAME, page_name).await?;
        Ok(normalize_all(rows, CATEGORY))
    }

    pub async fn find_section(
        db: &Database,
        page_name: &str,
        section_name: &str,
    ) -> Result<Option<Record>, DbError> {
        let row = sqlx::query_scalar::<_, Json<Record>>(
            "SELECT to_jsonb(t) AS record FROM page_content t \
             WHERE t.page_name = $1 AND t.section_name = $2",
        )
        .bind(page_name)
        .bind(section_name)
        .fetch_optional(db.reader())
        .await?;
        Ok(row.map(|Json(r)| frontend_record(&r, CATEGORY)))
    }

    /// Create or replace the content of one section.
    pub async fn upsert_section(
        db: &Database,
        page_name: &str,
        section_name: &str,
        content: &serde_json::Value,
    ) -> Result<Record, DbError> {
        let Json(row) = sqlx::query_scalar::<_, Json<Record>>(
            "INSERT INTO page_content (page_name, section_name, content) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (page_name, section_name) \
             DO UPDATE SET content = EXCLUDED.content, updated_at = now() \
             RETURNING to_jsonb(page_content.*) AS record",
        )
        .bind(page_name)
        .bind(section_name)
        .bind(Json(content))
        .fetch_one(db.writer())
        .await?;

        tracing::info!(page = page_name, section = section_name, "Page section saved");
        Ok(frontend_record(&row, CATEGORY))
    }
}
