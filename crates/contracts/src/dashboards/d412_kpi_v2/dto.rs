use serde::{Deserialize, Serialize};

pub const ERR_MISSING_DATE: &str = "MISSING_DATE";
pub const ERR_DATE_NOT_FOUND: &str = "DATE_NOT_FOUND";
pub const ERR_KPI_V2: &str = "KPI_V2_ERROR";

/// Tri-state comparison result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiStatus {
    Equal,
    Over,
    Lack,
}

impl KpiStatus {
    /// `diff > 0 → over`, `diff < 0 → lack`, otherwise `equal`
    pub fn from_diff(diff: f64) -> Self {
        if diff > 0.0 {
            KpiStatus::Over
        } else if diff < 0.0 {
            KpiStatus::Lack
        } else {
            KpiStatus::Equal
        }
    }
}

/// Request for /api/kpi-v2, either as query string or JSON body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiV2Request {
    pub date: Option<String>,
}

/// Plan vs actual for one hour on one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourRecord {
    pub hour: String,
    pub line: String,
    pub plan: f64,
    pub actual: f64,
    pub diff: f64,
    pub status: KpiStatus,
}

/// Day total for one line, compared against the efficiency target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub line: String,
    pub plan_total: f64,
    pub actual_total: f64,
    /// Percent, two decimals; 0 when the plan total is 0
    pub efficiency_pct: f64,
    pub status: KpiStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiV2Response {
    /// Always "success"; errors use `StatusErrorBody`
    pub status: String,
    pub date: String,
    pub range: String,
    pub hour_alerts: Vec<HourRecord>,
    pub day_alerts: Vec<LineSummary>,
}
