//! Listing analytics for the admin dashboard.
//!
//! Works on presentation-shaped property records (`createdAt`), falling back
//! to `created_at` so raw rows can be summarized too.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{Duration, Months};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::fields::{backend, frontend};
use crate::search::matches_type;
use crate::types::{Record, Timestamp};
use crate::value::parse_timestamp;

/// Number of records in [`ListingAnalytics::top_performers`].
pub const TOP_PERFORMER_COUNT: usize = 5;

/// Number of records in [`ListingAnalytics::recent_activity`].
pub const RECENT_ACTIVITY_COUNT: usize = 10;

// ---------------------------------------------------------------------------
// Time range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRange {
    #[default]
    All,
    Week,
    Month,
    Quarter,
    Year,
}

impl TimeRange {
    /// Earliest creation time kept by this range, or `None` for [`TimeRange::All`].
    pub fn cutoff(self, now: Timestamp) -> Option<Timestamp> {
        match self {
            Self::All => None,
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => now.checked_sub_months(Months::new(1)),
            Self::Quarter => now.checked_sub_months(Months::new(3)),
            Self::Year => now.checked_sub_months(Months::new(12)),
        }
    }
}

impl FromStr for TimeRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(CoreError::Validation(format!("Unknown time range: '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingAnalytics {
    pub total_properties: usize,
    pub total_value: f64,
    pub average_price: f64,
    /// Over strictly positive prices only.
    pub price_range: PriceRange,
    pub property_types: BTreeMap<String, usize>,
    pub location_stats: BTreeMap<String, usize>,
    /// `YYYY-MM` → listings created that month.
    pub monthly_trends: BTreeMap<String, usize>,
    pub top_performers: Vec<Record>,
    pub recent_activity: Vec<Record>,
}

// ---------------------------------------------------------------------------
// Logic
// ---------------------------------------------------------------------------

fn created_at(record: &Record) -> Option<Timestamp> {
    record
        .get(frontend::CREATED_AT)
        .or_else(|| record.get(backend::CREATED_AT))
        .and_then(parse_timestamp)
}

fn price(record: &Record) -> f64 {
    record
        .get(frontend::PRICE)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

/// Keep records created within `range` of `now` whose type matches.
///
/// When a range is active, records without a parseable creation date are
/// dropped.
pub fn filter_listings(
    records: &[Record],
    range: TimeRange,
    property_type: Option<&str>,
    now: Timestamp,
) -> Vec<Record> {
    let cutoff = range.cutoff(now);
    records
        .iter()
        .filter(|r| match cutoff {
            Some(cutoff) => created_at(r).is_some_and(|ts| ts >= cutoff),
            None => true,
        })
        .filter(|r| matches_type(r, property_type))
        .cloned()
        .collect()
}

/// Summarize a set of listings.
pub fn compute_analytics(records: &[Record]) -> ListingAnalytics {
    let total_properties = records.len();
    let total_value: f64 = records.iter().map(price).sum();
    let average_price = if total_properties > 0 {
        total_value / total_properties as f64
    } else {
        0.0
    };

    let positive: Vec<f64> = records.iter().map(price).filter(|p| *p > 0.0).collect();
    let price_range = if positive.is_empty() {
        PriceRange::default()
    } else {
        PriceRange {
            min: positive.iter().copied().fold(f64::INFINITY, f64::min),
            max: positive.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    };

    let property_types = count_by(records, frontend::TYPE);
    let location_stats = count_by(records, frontend::LOCATION);

    let mut monthly_trends = BTreeMap::new();
    for ts in records.iter().filter_map(created_at) {
        *monthly_trends.entry(ts.format("%Y-%m").to_string()).or_insert(0) += 1;
    }

    let mut by_price: Vec<&Record> = records.iter().collect();
    by_price.sort_by(|a, b| price(b).partial_cmp(&price(a)).unwrap_or(Ordering::Equal));
    let top_performers = by_price
        .into_iter()
        .take(TOP_PERFORMER_COUNT)
        .cloned()
        .collect();

    // Newest first; undated records sort last.
    let mut by_date: Vec<&Record> = records.iter().collect();
    by_date.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    let recent_activity = by_date
        .into_iter()
        .take(RECENT_ACTIVITY_COUNT)
        .cloned()
        .collect();

    ListingAnalytics {
        total_properties,
        total_value,
        average_price,
        price_range,
        property_types,
        location_stats,
        monthly_trends,
        top_performers,
        recent_activity,
    }
}

/// Count non-empty string values of `field`.
fn count_by(records: &[Record], field: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for key in records
        .iter()
        .filter_map(|r| r.get(field).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
    {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn listing(id: i64, price: Value, kind: &str, location: &str, created: &str) -> Record {
        json!({
            "id": id,
            "price": price,
            "type": kind,
            "location": location,
            "createdAt": created,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    fn sample() -> Vec<Record> {
        vec![
            listing(1, json!(300000), "villa", "Sliema", "2024-06-10T00:00:00Z"),
            listing(2, json!(150000), "apartment", "Valletta", "2024-05-20T00:00:00Z"),
            listing(3, json!(0), "apartment", "Sliema", "2024-02-01T00:00:00Z"),
            listing(4, Value::Null, "house", "", "2023-01-01T00:00:00Z"),
        ]
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[test]
    fn time_range_parses() {
        assert_eq!("quarter".parse::<TimeRange>().unwrap(), TimeRange::Quarter);
        assert!("decade".parse::<TimeRange>().is_err());
    }

    #[test]
    fn cutoffs() {
        assert_eq!(TimeRange::All.cutoff(now()), None);
        assert_eq!(
            TimeRange::Week.cutoff(now()),
            Some(Utc.with_ymd_and_hms(2024, 6, 8, 12, 0, 0).unwrap())
        );
        assert_eq!(
            TimeRange::Quarter.cutoff(now()),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn filter_by_range_and_type() {
        let records = sample();
        assert_eq!(ids(&filter_listings(&records, TimeRange::Week, None, now())), vec![1]);
        assert_eq!(ids(&filter_listings(&records, TimeRange::Month, None, now())), vec![1, 2]);
        assert_eq!(
            ids(&filter_listings(&records, TimeRange::Year, Some("apartment"), now())),
            vec![2, 3]
        );
        assert_eq!(
            ids(&filter_listings(&records, TimeRange::All, Some("all"), now())),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn undated_records_drop_out_of_ranges() {
        let mut undated = listing(5, json!(1), "villa", "Mdina", "");
        undated.remove("createdAt");
        let records = vec![undated];
        assert!(filter_listings(&records, TimeRange::Year, None, now()).is_empty());
        assert_eq!(filter_listings(&records, TimeRange::All, None, now()).len(), 1);
    }

    #[test]
    fn totals_and_averages() {
        let report = compute_analytics(&sample());
        assert_eq!(report.total_properties, 4);
        assert_eq!(report.total_value, 450000.0);
        assert_eq!(report.average_price, 112500.0);
        assert_eq!(report.price_range, PriceRange { min: 150000.0, max: 300000.0 });
    }

    #[test]
    fn counts_by_type_location_and_month() {
        let report = compute_analytics(&sample());
        assert_eq!(report.property_types["apartment"], 2);
        assert_eq!(report.property_types["villa"], 1);
        assert_eq!(report.location_stats["Sliema"], 2);
        assert!(!report.location_stats.contains_key(""));
        assert_eq!(report.monthly_trends["2024-06"], 1);
        assert_eq!(report.monthly_trends["2023-01"], 1);
    }

    #[test]
    fn rankings() {
        let report = compute_analytics(&sample());
        assert_eq!(ids(&report.top_performers), vec![1, 2, 3, 4]);
        assert_eq!(ids(&report.recent_activity), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_input() {
        let report = compute_analytics(&[]);
        assert_eq!(report, ListingAnalytics::default());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(compute_analytics(&sample())).unwrap();
        assert_eq!(json["totalProperties"], 4);
        assert!(json["priceRange"]["min"].is_number());
        assert!(json["monthlyTrends"].is_object());
    }
}
