//! SQL builders for JSON-shaped records.
//!
//! Rows are selected as `to_jsonb(t)` and written through
//! `jsonb_populate_record`, so every table shares one code path. Column
//! names only ever come from [`TableCategory::columns`]; anything else is
//! rejected before it reaches SQL text.

use keystone_core::table::TableCategory;
use keystone_core::types::Record;

use crate::error::DbError;

/// Columns the database manages on insert.
const INSERT_MANAGED: &[&str] = &["id", "created_at", "updated_at"];

/// Columns the database manages on update (`updated_at` is set to `now()`).
const UPDATE_MANAGED: &[&str] = &["id", "created_at", "updated_at"];

/// Newest first, with `id` as a tiebreaker for rows sharing a timestamp.
const ORDER_RECENT: &str = "ORDER BY t.created_at DESC, t.id DESC";

/// Resolve `name` to the static column name of `category`.
pub fn checked_column(category: TableCategory, name: &str) -> Result<&'static str, DbError> {
    category
        .columns()
        .iter()
        .copied()
        .find(|column| *column == name)
        .ok_or_else(|| DbError::UnknownColumn {
            table: category,
            column: name.to_string(),
        })
}

/// Writable columns present in `record`, in table column order.
fn writable_columns(
    category: TableCategory,
    record: &Record,
    managed: &[&str],
) -> Result<Vec<&'static str>, DbError> {
    for key in record.keys() {
        checked_column(category, key)?;
    }

    let columns: Vec<&'static str> = category
        .columns()
        .iter()
        .copied()
        .filter(|column| !managed.contains(column) && record.contains_key(*column))
        .collect();

    if columns.is_empty() {
        return Err(DbError::EmptyRecord(category));
    }
    Ok(columns)
}

fn quoted(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

pub fn select_recent(category: TableCategory) -> String {
    format!("SELECT to_jsonb(t) AS record FROM {category} t {ORDER_RECENT}")
}

/// `$1`: the id.
pub fn select_by_id(category: TableCategory) -> String {
    format!("SELECT to_jsonb(t) AS record FROM {category} t WHERE t.id = $1")
}

/// `$1`: the text value compared against `field`.
pub fn select_where_eq(category: TableCategory, field: &str) -> Result<String, DbError> {
    let column = checked_column(category, field)?;
    Ok(format!(
        "SELECT to_jsonb(t) AS record FROM {category} t WHERE t.\"{column}\" = $1 {ORDER_RECENT}"
    ))
}

pub fn select_where_true(category: TableCategory, field: &str) -> Result<String, DbError> {
    let column = checked_column(category, field)?;
    Ok(format!(
        "SELECT to_jsonb(t) AS record FROM {category} t WHERE t.\"{column}\" IS TRUE {ORDER_RECENT}"
    ))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// `$1`: the record as JSONB.
pub fn insert(category: TableCategory, record: &Record) -> Result<String, DbError> {
    let columns = quoted(&writable_columns(category, record, INSERT_MANAGED)?);
    Ok(format!(
        "INSERT INTO {category} ({columns}) \
         SELECT {columns} FROM jsonb_populate_record(NULL::{category}, $1) \
         RETURNING to_jsonb({category}.*) AS record"
    ))
}

/// `$1`: the record as JSONB, `$2`: the id.
pub fn update(category: TableCategory, record: &Record) -> Result<String, DbError> {
    let assignments = writable_columns(category, record, UPDATE_MANAGED)?
        .iter()
        .map(|c| format!("\"{c}\" = r.\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "UPDATE {category} AS t SET {assignments}, updated_at = now() \
         FROM jsonb_populate_record(NULL::{category}, $1) AS r \
         WHERE t.id = $2 \
         RETURNING to_jsonb(t.*) AS record"
    ))
}

/// `$1`: the id.
pub fn delete(category: TableCategory) -> String {
    format!("DELETE FROM {category} WHERE id = $1")
}
