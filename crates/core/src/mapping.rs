//! Record renaming between the database and presentation conventions.
//!
//! All functions return new maps; inputs are never mutated. Fields with no
//! rename rule pass through under their original name.

use serde_json::Value;

use crate::fields::{renames, FieldRename};
use crate::table::TableCategory;
use crate::types::Record;
use crate::value::is_truthy;

// ---------------------------------------------------------------------------
// Single records
// ---------------------------------------------------------------------------

/// Convert a database record to presentation shape.
///
/// Returns `None` when `record` is absent.
pub fn to_frontend(record: Option<&Record>, category: TableCategory) -> Option<Record> {
    record.map(|r| frontend_record(r, category))
}

/// Convert a presentation record to database shape.
///
/// Contact fields always target the modern column spelling; legacy
/// spellings are never written.
pub fn to_backend(record: Option<&Record>, category: TableCategory) -> Option<Record> {
    record.map(|r| backend_record(r, category))
}

/// Infallible form of [`to_frontend`] for callers holding a record.
pub fn frontend_record(record: &Record, category: TableCategory) -> Record {
    let mut out = record.clone();
    for rule in renames(category) {
        match rule.legacy {
            None => rename_non_null(&mut out, rule.backend, rule.frontend),
            Some(legacy) => resolve_contact(&mut out, rule, legacy),
        }
    }
    out
}

/// Infallible form of [`to_backend`] for callers holding a record.
pub fn backend_record(record: &Record, category: TableCategory) -> Record {
    let mut out = record.clone();
    for rule in renames(category) {
        match rule.legacy {
            None => rename_non_null(&mut out, rule.frontend, rule.backend),
            Some(_) => rename_truthy(&mut out, rule.frontend, rule.backend),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Apply [`to_frontend`] to each element of a JSON array, in order.
///
/// A non-array input yields an empty vec. Elements that are not objects
/// map to `None`.
pub fn to_frontend_many(records: &Value, category: TableCategory) -> Vec<Option<Record>> {
    map_array(records, |r| to_frontend(r, category))
}

/// Apply [`to_backend`] to each element of a JSON array, in order.
pub fn to_backend_many(records: &Value, category: TableCategory) -> Vec<Option<Record>> {
    map_array(records, |r| to_backend(r, category))
}

fn map_array(
    records: &Value,
    convert: impl Fn(Option<&Record>) -> Option<Record>,
) -> Vec<Option<Record>> {
    match records {
        Value::Array(items) => items.iter().map(|item| convert(item.as_object())).collect(),
        _ => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Rename primitives
// ---------------------------------------------------------------------------

fn rename_non_null(record: &mut Record, from: &str, to: &str) {
    if record.get(from).is_some_and(|v| !v.is_null()) {
        move_field(record, from, to);
    }
}

fn rename_truthy(record: &mut Record, from: &str, to: &str) {
    if record.get(from).is_some_and(is_truthy) {
        move_field(record, from, to);
    }
}

/// Modern spelling first, then legacy.
///
/// The legacy spelling is only consulted while the presentation field is
/// still unset, so an already-normalized record keeps its contact value.
fn resolve_contact(record: &mut Record, rule: &FieldRename, legacy: &str) {
    if record.get(rule.backend).is_some_and(is_truthy) {
        move_field(record, rule.backend, rule.frontend);
    } else if !record.get(rule.frontend).is_some_and(is_truthy)
        && record.get(legacy).is_some_and(is_truthy)
    {
        move_field(record, legacy, rule.frontend);
    }
}

fn move_field(record: &mut Record, from: &str, to: &str) {
    if let Some(value) = record.remove(from) {
        record.insert(to.to_string(), value);
    }
}
