//! Repository layer.
//!
//! [`RecordRepo`] is the zero-sized, table-agnostic base taking `&DbPool`.
//! The typed repositories take a [`Database`](crate::Database), choose the
//! credential tier, and run the normalizer on the way in and out.

pub mod blog_post_repo;
pub mod client_submission_repo;
pub mod page_content_repo;
pub mod property_repo;
pub mod record_repo;

pub use blog_post_repo::BlogPostRepo;
pub use client_submission_repo::ClientSubmissionRepo;
pub use page_content_repo::PageContentRepo;
pub use property_repo::PropertyRepo;
pub use record_repo::RecordRepo;

use keystone_core::coercion::{coerce_types, NUMERIC_FIELDS};
use keystone_core::fields::renames;
use keystone_core::mapping::{backend_record, frontend_record};
use keystone_core::table::TableCategory;
use keystone_core::types::Record;

/// Coerce and rename a presentation record into column shape.
///
/// The rename leaves null (and, for contact fields, empty) presentation
/// fields under their presentation name; they still address their column,
/// so they are moved here. Numeric defaults are kept only where the table
/// has the column.
pub(crate) fn prepare_write(input: &Record, category: TableCategory) -> Record {
    let mut row = backend_record(&coerce_types(input, category), category);

    for rule in renames(category) {
        if let Some(value) = row.remove(rule.frontend) {
            if !row.contains_key(rule.backend) {
                row.insert(rule.backend.to_string(), value);
            }
        }
    }

    for field in NUMERIC_FIELDS {
        if !category.has_column(field) {
            row.remove(field);
        }
    }

    row
}

/// Rename stored rows into presentation shape, keeping order.
pub(crate) fn normalize_all(rows: Vec<Record>, category: TableCategory) -> Vec<Record> {
    rows.iter().map(|row| frontend_record(row, category)).collect()
}
