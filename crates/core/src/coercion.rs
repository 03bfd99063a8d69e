//! Type coercion for records headed to the database.
//!
//! Form inputs arrive as strings; the columns want numbers, booleans and
//! clean arrays. Coercion never fails: unparseable values become `null`.
//! Field names are the same in both conventions for everything touched here,
//! so coercion works on either shape.

use serde_json::Value;

use crate::fields::backend;
use crate::table::TableCategory;
use crate::types::Record;
use crate::value::{is_blank, is_truthy, number_from_f64};

/// Numeric fields coerced on every write.
pub const NUMERIC_FIELDS: [&str; 5] = [
    backend::PRICE,
    backend::BEDS,
    backend::BATHS,
    backend::PARKING,
    backend::AREA,
];

/// Array fields whose blank entries are dropped.
pub const LIST_FIELDS: [&str; 2] = [backend::FEATURES, backend::IMAGES];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumericKind {
    Integer,
    Float,
}

fn numeric_kind(field: &str) -> NumericKind {
    match field {
        backend::BEDS | backend::PARKING => NumericKind::Integer,
        _ => NumericKind::Float,
    }
}

/// Value written when a numeric field is missing or blank.
fn numeric_default(field: &str) -> Value {
    match field {
        backend::PRICE | backend::AREA => Value::from(0),
        _ => Value::Null,
    }
}

/// Coerce a record's field values into their stored types.
///
/// - `price`, `area`, `baths` parse as floats; `beds`, `parking` as
///   integers. Strings are read up to the end of their leading number
///   (`"3 beds"` is 3); a string with no leading number yields `null`.
/// - A missing or blank `price`/`area` becomes `0` and a missing or blank
///   `beds`/`baths`/`parking` becomes `null`, whatever the category. The
///   persistence layer drops the ones its table has no column for.
/// - For `blog_posts`, a present `published` becomes a strict boolean.
/// - `features` and `images` arrays lose null, empty and whitespace-only
///   entries, keeping order.
///
/// Unrecognized fields pass through untouched.
pub fn coerce_types(record: &Record, category: TableCategory) -> Record {
    let mut out = record.clone();

    for field in NUMERIC_FIELDS {
        let coerced = match out.get(field) {
            Some(value) if !is_blank(value) => parse_numeric(value, numeric_kind(field)),
            _ => numeric_default(field),
        };
        out.insert(field.to_string(), coerced);
    }

    if category == TableCategory::BlogPosts {
        if let Some(published) = out.get_mut(backend::PUBLISHED) {
            *published = Value::Bool(is_truthy(published));
        }
    }

    for field in LIST_FIELDS {
        if let Some(Value::Array(items)) = out.get_mut(field) {
            items.retain(is_meaningful_entry);
        }
    }

    out
}

fn parse_numeric(value: &Value, kind: NumericKind) -> Value {
    match (value, kind) {
        (Value::Number(n), NumericKind::Float) => Value::Number(n.clone()),
        (Value::Number(n), NumericKind::Integer) => match n.as_i64() {
            Some(i) => Value::from(i),
            None => n.as_f64().map(truncate).unwrap_or(Value::Null),
        },
        (Value::String(s), NumericKind::Float) => leading_float(s)
            .and_then(parse_finite)
            .map(number_from_f64)
            .unwrap_or(Value::Null),
        (Value::String(s), NumericKind::Integer) => match leading_integer(s) {
            Some(digits) => match digits.parse::<i64>() {
                Ok(i) => Value::from(i),
                Err(_) => parse_finite(digits).map(truncate).unwrap_or(Value::Null),
            },
            None => Value::Null,
        },
        _ => Value::Null,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Length of the run of ASCII digits at the start of `s`.
fn digit_run(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Length of an optional leading `+`/`-`.
fn sign_len(s: &str) -> usize {
    usize::from(s.starts_with(['+', '-']))
}

/// Leading `[+-]digits` of `s` after trimming whitespace.
fn leading_integer(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let sign = sign_len(s);
    let digits = digit_run(&s[sign..]);
    (digits > 0).then(|| &s[..sign + digits])
}

/// Leading decimal number of `s` after trimming whitespace: an optional
/// sign, digits with an optional fraction, and an optional exponent.
fn leading_float(s: &str) -> Option<&str> {
    let s = s.trim_start();
    let mut end = sign_len(s);

    let whole = digit_run(&s[end..]);
    end += whole;

    let mut fraction = 0;
    if s[end..].starts_with('.') {
        fraction = digit_run(&s[end + 1..]);
        if whole > 0 || fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole == 0 && fraction == 0 {
        return None;
    }

    if s[end..].starts_with(['e', 'E']) {
        let exp_sign = sign_len(&s[end + 1..]);
        let exp_digits = digit_run(&s[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    Some(&s[..end])
}

/// Drop the fractional part, as form integer fields do (`"2.5"` beds is 2).
fn truncate(f: f64) -> Value {
    number_from_f64(f.trunc())
}

fn is_meaningful_entry(entry: &Value) -> bool {
    match entry {
        Value::String(s) => !s.trim().is_empty(),
        other => is_truthy(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coerce(value: Value, category: TableCategory) -> Record {
        coerce_types(value.as_object().unwrap(), category)
    }

    #[test]
    fn price_parses_as_float() {
        let out = coerce(json!({"price": "1200.50"}), TableCategory::Properties);
        assert_eq!(out["price"], json!(1200.5));
    }

    #[test]
    fn whole_price_is_stored_as_integer() {
        let out = coerce(json!({"price": "250000"}), TableCategory::Properties);
        assert_eq!(out["price"], json!(250000));
    }

    #[test]
    fn empty_price_defaults_to_zero() {
        let out = coerce(json!({"price": ""}), TableCategory::Properties);
        assert_eq!(out["price"], json!(0));
    }

    #[test]
    fn malformed_beds_become_null() {
        let out = coerce(json!({"beds": "abc", "price": "-", "area": ".e5"}), TableCategory::Properties);
        assert_eq!(out["beds"], Value::Null);
        assert_eq!(out["price"], Value::Null);
        assert_eq!(out["area"], Value::Null);
    }

    #[test]
    fn leading_number_is_kept_and_trailing_text_ignored() {
        let out = coerce(
            json!({"beds": "3 beds", "price": "1200abc", "baths": "1.5 baths", "parking": "2.9x"}),
            TableCategory::Properties,
        );
        assert_eq!(out["beds"], json!(3));
        assert_eq!(out["price"], json!(1200));
        assert_eq!(out["baths"], json!(1.5));
        assert_eq!(out["parking"], json!(2));
    }

    #[test]
    fn float_prefix_forms() {
        assert_eq!(leading_float("  -12.5e3 sq ft"), Some("-12.5e3"));
        assert_eq!(leading_float(".5"), Some(".5"));
        assert_eq!(leading_float("7."), Some("7."));
        assert_eq!(leading_float("1e"), Some("1"));
        assert_eq!(leading_float("e3"), None);
        assert_eq!(leading_integer("+42 rooms"), Some("+42"));
        assert_eq!(leading_integer("rooms: 4"), None);
    }

    #[test]
    fn integer_fields_truncate_fractions() {
        let out = coerce(json!({"beds": "2.7", "parking": 1.9}), TableCategory::Properties);
        assert_eq!(out["beds"], json!(2));
        assert_eq!(out["parking"], json!(1));
    }

    #[test]
    fn baths_keep_halves() {
        let out = coerce(json!({"baths": "2.5"}), TableCategory::Properties);
        assert_eq!(out["baths"], json!(2.5));
    }

    #[test]
    fn zero_is_a_valid_count() {
        let out = coerce(json!({"beds": "0", "parking": 0}), TableCategory::Properties);
        assert_eq!(out["beds"], json!(0));
        assert_eq!(out["parking"], json!(0));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let out = coerce(json!({"area": " 1250 ", "beds": " 3 "}), TableCategory::Properties);
        assert_eq!(out["area"], json!(1250));
        assert_eq!(out["beds"], json!(3));
    }

    #[test]
    fn non_finite_and_non_scalar_values_become_null() {
        let out = coerce(
            json!({"price": "Infinity", "area": "NaN", "beds": true, "baths": [2]}),
            TableCategory::Properties,
        );
        assert_eq!(out["price"], Value::Null);
        assert_eq!(out["area"], Value::Null);
        assert_eq!(out["beds"], Value::Null);
        assert_eq!(out["baths"], Value::Null);
    }

    #[test]
    fn missing_property_numbers_get_defaults() {
        let out = coerce(json!({"title": "Loft"}), TableCategory::Properties);
        assert_eq!(out["price"], json!(0));
        assert_eq!(out["area"], json!(0));
        assert_eq!(out["beds"], Value::Null);
        assert_eq!(out["baths"], Value::Null);
        assert_eq!(out["parking"], Value::Null);
        assert_eq!(out["title"], "Loft");
    }

    #[test]
    fn numeric_defaults_apply_to_every_category() {
        for category in [TableCategory::BlogPosts, TableCategory::ClientSubmissions, TableCategory::PageContent] {
            let out = coerce(json!({"title": "Market update"}), category);
            assert_eq!(
                Value::Object(out),
                json!({
                    "title": "Market update",
                    "price": 0,
                    "area": 0,
                    "beds": null,
                    "baths": null,
                    "parking": null,
                }),
                "defaults for {category}"
            );
        }
    }

    #[test]
    fn published_becomes_strict_boolean_for_blog_posts() {
        let on = coerce(json!({"published": "yes"}), TableCategory::BlogPosts);
        assert_eq!(on["published"], json!(true));

        let off = coerce(json!({"published": ""}), TableCategory::BlogPosts);
        assert_eq!(off["published"], json!(false));

        let null = coerce(json!({"published": null}), TableCategory::BlogPosts);
        assert_eq!(null["published"], json!(false));
    }

    #[test]
    fn published_is_left_alone_outside_blog_posts() {
        let out = coerce(json!({"published": "yes"}), TableCategory::PageContent);
        assert_eq!(out["published"], "yes");
    }

    #[test]
    fn blank_list_entries_are_dropped_in_order() {
        let out = coerce(
            json!({
                "features": ["", "  ", "Pool", null],
                "images": ["a.jpg", " ", "b.jpg"],
            }),
            TableCategory::Properties,
        );
        assert_eq!(out["features"], json!(["Pool"]));
        assert_eq!(out["images"], json!(["a.jpg", "b.jpg"]));
    }

    #[test]
    fn non_array_lists_pass_through() {
        let out = coerce(json!({"features": "Pool, Garden"}), TableCategory::Properties);
        assert_eq!(out["features"], "Pool, Garden");
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let out = coerce(json!({"id": 1, "ownership_years": "5"}), TableCategory::Properties);
        assert_eq!(out["id"], 1);
        assert_eq!(out["ownership_years"], "5");
    }
}
