use std::collections::BTreeMap;

use crate::dashboards::error::KpiError;
use crate::shared::config::SheetsConfig;
use crate::shared::kpi::config_lookup;
use crate::shared::sheets::RangeReader;

/// Configured dates, chronological
pub async fn list_dates(
    reader: &dyn RangeReader,
    sheets: &SheetsConfig,
) -> Result<Vec<String>, KpiError> {
    let grid = reader.read_range(&sheets.config_table_range()).await?;
    let dates = config_lookup::sorted_dates(&config_lookup::parse_config_rows(&grid));
    tracing::info!("D411 KPI config: {} dates", dates.len());
    Ok(dates)
}

/// Date → range map
pub async fn date_map(
    reader: &dyn RangeReader,
    sheets: &SheetsConfig,
) -> Result<BTreeMap<String, String>, KpiError> {
    let grid = reader.read_range(&sheets.config_table_range()).await?;
    let map = config_lookup::config_map(&config_lookup::parse_config_rows(&grid));
    tracing::info!("D411 KPI config: {} mapped dates", map.len());
    Ok(map)
}
