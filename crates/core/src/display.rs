//! Human-readable rendering of record fields.
//!
//! Formatting follows US conventions: `$500,000`, `1,250 sq ft`,
//! `Monday, January 1, 2024`. Nothing here fails; missing or unusable
//! values render as the caller's fallback.

use serde_json::Value;

use crate::fields::{backend, contact_spellings, frontend};
use crate::types::{Record, Timestamp};
use crate::value::{is_blank, is_truthy, parse_timestamp, value_to_text};

/// Fallback shown when a field has no displayable value.
pub const DEFAULT_FALLBACK: &str = "N/A";

/// Unit suffix appended to formatted areas.
pub const AREA_UNIT: &str = "sq ft";

/// Render `field` of `record` for display.
///
/// Contact fields (`contactName`/`contactname`/`name` and the email and
/// phone equivalents) resolve through every known spelling before
/// formatting.
pub fn display_value(record: Option<&Record>, field: &str, fallback: &str) -> String {
    let Some(record) = record else {
        return fallback.to_string();
    };
    if field.is_empty() {
        return fallback.to_string();
    }

    if let Some(spellings) = contact_spellings(field) {
        return spellings
            .iter()
            .filter_map(|name| record.get(*name))
            .find(|value| is_truthy(value))
            .map(value_to_text)
            .unwrap_or_else(|| fallback.to_string());
    }

    let value = match record.get(field) {
        Some(value) if !is_blank(value) => value,
        _ => return fallback.to_string(),
    };

    match field {
        backend::PRICE => match as_number(value) {
            Some(amount) => format_currency(amount),
            None => value_to_text(value),
        },
        backend::AREA => match as_number(value) {
            Some(area) => format_area(area),
            None => value_to_text(value),
        },
        backend::CREATED_AT | frontend::CREATED_AT => match parse_timestamp(value) {
            Some(ts) => format_long_date(&ts),
            None => fallback.to_string(),
        },
        _ => value_to_text(value),
    }
}

/// [`display_value`] with the standard `"N/A"` fallback.
pub fn display_value_or_na(record: Option<&Record>, field: &str) -> String {
    display_value(record, field, DEFAULT_FALLBACK)
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Formatters
// ---------------------------------------------------------------------------

/// Format a dollar amount with thousands separators and no cents.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(&whole_digits(rounded)))
}

/// Format an area as a whole number with the unit suffix.
pub fn format_area(area: f64) -> String {
    let rounded = area.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{} {AREA_UNIT}", group_thousands(&whole_digits(rounded)))
}

/// `Monday, January 1, 2024`, in UTC.
pub fn format_long_date(ts: &Timestamp) -> String {
    ts.format("%A, %B %-d, %Y").to_string()
}

/// Decimal digits of `|n|`, which must already be whole.
///
/// Formatted from the float so magnitudes beyond `u64` are not clamped.
fn whole_digits(n: f64) -> String {
    format!("{:.0}", n.abs())
}

/// Insert `,` between every group of three digits of a digit string.
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
