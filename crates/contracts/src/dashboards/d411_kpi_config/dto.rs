use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ERR_KPI_CONFIG: &str = "KPI_CONFIG_ERROR";

/// GET /api/kpi-config[?list=1]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiConfigRequest {
    pub list: Option<String>,
}

impl KpiConfigRequest {
    /// Any non-empty value other than "0"/"false" asks for the date list
    pub fn wants_list(&self) -> bool {
        match self.list.as_deref().map(str::trim) {
            None | Some("") | Some("0") => false,
            Some(v) => !v.eq_ignore_ascii_case("false"),
        }
    }
}

/// One row of the configuration sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// "dd/mm/yyyy"
    pub date: String,
    /// A1 notation, e.g. "KPI!A19:AZ37"
    pub range: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiConfigDatesResponse {
    pub ok: bool,
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiConfigMapResponse {
    pub ok: bool,
    pub map: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_list() {
        let req = |v: Option<&str>| KpiConfigRequest {
            list: v.map(str::to_string),
        };
        assert!(req(Some("1")).wants_list());
        assert!(req(Some("true")).wants_list());
        assert!(!req(None).wants_list());
        assert!(!req(Some("0")).wants_list());
        assert!(!req(Some("")).wants_list());
        assert!(!req(Some("False")).wants_list());
    }
}
