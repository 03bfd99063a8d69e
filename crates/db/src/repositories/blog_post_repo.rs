//! Repository for the `blog_posts` table.

use keystone_core::fields::backend;
use keystone_core::mapping::frontend_record;
use keystone_core::table::TableCategory;
use keystone_core::types::{DbId, Record};

use super::{normalize_all, prepare_write, RecordRepo};
use crate::error::DbError;
use crate::Database;

const CATEGORY: TableCategory = TableCategory::BlogPosts;

pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Every post including drafts, newest first. Admin view.
    pub async fn list_all(db: &Database) -> Result<Vec<Record>, DbError> {
        let rows = RecordRepo::list_recent(db.writer(), CATEGORY).await?;
        Ok(normalize_all(rows, CATEGORY))
    }

    /// Published posts, newest first.
    pub async fn list_published(db: &Database) -> Result<Vec<Record>, DbError> {
        let rows = RecordRepo::list_where_true(db.reader(), CATEGORY, backend::PUBLISHED).await?;
        tracing::debug!(count = rows.len(), "Fetched published blog posts");
        Ok(normalize_all(rows, CATEGORY))
    }

    pub async fn find_by_slug(db: &Database, slug: &str) -> Result<Option<Record>, DbError> {
        let row = RecordRepo::find_where_eq(db.reader(), CATEGORY, backend::SLUG, slug).await?;
        Ok(row.map(|r| frontend_record(&r, CATEGORY)))
    }

    pub async fn create(db: &Database, input: &Record) -> Result<Record, DbError> {
        let row = RecordRepo::insert(db.writer(), CATEGORY, &prepare_write(input, CATEGORY)).await?;
        tracing::info!(post_id = ?row.get("id"), slug = ?row.get(backend::SLUG), "Blog post created");
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
            tracing::info!(post_id = id, "Blog post updated");
        }
        Ok(row.map(|r| frontend_record(&r, CATEGORY)))
    }

    pub async fn delete(db: &Database, id: DbId) -> Result<bool, DbError> {
        let deleted = RecordRepo::delete(db.writer(), CATEGORY, id).await?;
        if deleted {
            tracing::info!(post_id = id, "Blog post deleted");
        }
        Ok(deleted)
    }
}
