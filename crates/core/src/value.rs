//! Loose-typed value helpers shared by the normalizer modules.
//!
//! Records arrive from HTML forms and from the database as untyped JSON, so
//! "is this set?" has to be answered the same way everywhere.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use crate::types::Timestamp;

/// Truthiness in the loose sense used by form handling.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; every other value,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `true` for `null` and the empty string.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Convert an `f64` into a JSON number, preferring an integer representation
/// when the value has no fractional part.
///
/// Non-finite values have no JSON form and become `null`.
pub fn number_from_f64(f: f64) -> Value {
    // 2^53: the largest range where every integer is exact in an f64.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    if !f.is_finite() {
        return Value::Null;
    }
    if f.fract() == 0.0 && f.abs() <= MAX_EXACT {
        return Value::from(f as i64);
    }
    serde_json::Number::from_f64(f)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Render a value as plain text.
///
/// Strings are returned without quotes, arrays are joined with `,`, and
/// objects fall back to their JSON encoding.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Parse a timestamp stored as a string or as epoch milliseconds.
///
/// Accepted string forms: RFC 3339 (`2024-01-01T00:00:00Z`,
/// `2024-01-01T00:00:00+00:00`), naive date-times with `T` or a space
/// separator (taken as UTC), and bare dates (midnight UTC).
pub fn parse_timestamp(value: &Value) -> Option<Timestamp> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<Timestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    // Postgres text output for timestamptz: `2024-01-01 00:00:00+00`.
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
