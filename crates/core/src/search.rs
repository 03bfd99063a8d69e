//! Free-text and type filtering for listing records.

use serde::Deserialize;
use serde_json::Value;

use crate::fields::frontend;
use crate::types::Record;

/// Sentinel accepted by type filters meaning "no filter".
pub const ALL_TYPES: &str = "all";

/// Fields scanned by the free-text search.
const SEARCH_FIELDS: [&str; 3] = [frontend::TITLE, frontend::LOCATION, frontend::DESCRIPTION];

/// Case-insensitive substring match of `term` against title, location and
/// description. An empty (or whitespace-only) term matches everything.
pub fn matches_search(record: &Record, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    SEARCH_FIELDS.iter().any(|field| {
        record
            .get(*field)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(&term))
    })
}

/// `true` when `property_type` is unset, empty, `"all"`, or equal to the
/// record's `type` field.
pub fn matches_type(record: &Record, property_type: Option<&str>) -> bool {
    match property_type {
        None | Some("") | Some(ALL_TYPES) => true,
        Some(wanted) => record.get(frontend::TYPE).and_then(Value::as_str) == Some(wanted),
    }
}

/// Listing filter as submitted by the admin listings screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
}

impl PropertyFilter {
    pub fn matches(&self, record: &Record) -> bool {
        self.search
            .as_deref()
            .map_or(true, |term| matches_search(record, term))
            && matches_type(record, self.property_type.as_deref())
    }

    /// Keep the matching records, in input order.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listings() -> Vec<Record> {
        [
            json!({"id": 1, "title": "Harbour View Villa", "location": "Sliema", "type": "villa"}),
            json!({"id": 2, "title": "City Loft", "location": "Valletta", "description": "Near the harbour", "type": "apartment"}),
            json!({"id": 3, "title": "Farmhouse", "location": "Gozo", "type": "house"}),
        ]
        .into_iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let filter = PropertyFilter {
            search: Some("HARBOUR".into()),
            property_type: None,
        };
        assert_eq!(ids(&filter.apply(&listings())), vec![1, 2]);
    }

    #[test]
    fn blank_search_matches_everything() {
        let filter = PropertyFilter {
            search: Some("   ".into()),
            property_type: Some(ALL_TYPES.into()),
        };
        assert_eq!(ids(&filter.apply(&listings())), vec![1, 2, 3]);
    }

    #[test]
    fn type_filter_is_exact() {
        let filter = PropertyFilter {
            search: None,
            property_type: Some("house".into()),
        };
        assert_eq!(ids(&filter.apply(&listings())), vec![3]);
    }

    #[test]
    fn empty_type_is_no_filter() {
        let record = &listings()[0];
        assert!(matches_type(record, Some("")));
        assert!(!matches_type(record, Some("house")));
    }

    #[test]
    fn filters_combine() {
        let filter = PropertyFilter {
            search: Some("harbour".into()),
            property_type: Some("apartment".into()),
        };
        assert_eq!(ids(&filter.apply(&listings())), vec![2]);
    }

    #[test]
    fn records_without_text_fields_do_not_match_a_term() {
        let bare = json!({"id": 9}).as_object().cloned().unwrap();
        assert!(!matches_search(&bare, "loft"));
        assert!(matches_search(&bare, ""));
    }

    #[test]
    fn filter_deserializes_type_key() {
        let filter: PropertyFilter =
            serde_json::from_value(json!({"search": "loft", "type": "apartment"})).unwrap();
        assert_eq!(filter.property_type.as_deref(), Some("apartment"));
    }
}
