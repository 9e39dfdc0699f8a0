use crate::dashboards::error::KpiError;
use crate::shared::config::SheetsConfig;
use crate::shared::kpi::config_lookup;
use crate::shared::sheets::RangeReader;

/// Trimmed `date` parameter, or a validation error when absent or blank
pub fn required_date(date: Option<&str>) -> Result<String, KpiError> {
    match date.map(str::trim) {
        Some(d) if !d.is_empty() => Ok(d.to_string()),
        _ => Err(KpiError::MissingParameter("date")),
    }
}

/// Looks `date` up in the config table and returns the fully qualified range
pub async fn resolve_day_range(
    reader: &dyn RangeReader,
    sheets: &SheetsConfig,
    date: &str,
) -> Result<String, KpiError> {
    let config_grid = reader.read_range(&sheets.config_table_range()).await?;
    let range = config_lookup::resolve_range(date, &config_grid)
        .ok_or_else(|| KpiError::DateNotFound(date.to_string()))?;
    Ok(sheets.kpi_range(&range))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_date() {
        assert_eq!(required_date(Some(" 23/12/2025 ")).unwrap(), "23/12/2025");
        assert!(matches!(
            required_date(Some("  ")),
            Err(KpiError::MissingParameter("date"))
        ));
        assert!(matches!(
            required_date(None),
            Err(KpiError::MissingParameter("date"))
        ));
    }
}
