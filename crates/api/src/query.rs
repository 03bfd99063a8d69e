//! Query parameter types shared by handlers.

use serde::Deserialize;

/// `?range=&type=` on the analytics endpoint.
///
/// `range` stays a string so an unknown value is reported as a validation
/// error instead of a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsParams {
    pub range: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
}
