use serde::{Deserialize, Serialize};

use crate::shared::grid::Grid;

pub const ERR_MISSING_DATE: &str = "MISSING_DATE";
pub const ERR_DATE_NOT_FOUND: &str = "DATE_NOT_FOUND";
pub const ERR_CHECK_KPI: &str = "CHECK_KPI_ERROR";

/// GET /api/check-kpi?date=23/12/2025
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckKpiRequest {
    /// Date in format "dd/mm/yyyy"
    pub date: Option<String>,
}

/// Raw KPI block for one day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckKpiResponse {
    pub ok: bool,
    pub date: String,
    /// A1 range the date is mapped to, e.g. "KPI!A19:AZ37"
    pub range: String,
    pub values: Grid,
}
