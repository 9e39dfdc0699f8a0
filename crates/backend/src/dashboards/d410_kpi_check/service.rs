use contracts::dashboards::d410_kpi_check::CheckKpiResponse;

use crate::dashboards::common::{required_date, resolve_day_range};
use crate::dashboards::error::KpiError;
use crate::shared::config::SheetsConfig;
use crate::shared::sheets::RangeReader;

/// Raw KPI block for the requested day
pub async fn check_kpi(
    reader: &dyn RangeReader,
    sheets: &SheetsConfig,
    date: Option<&str>,
) -> Result<CheckKpiResponse, KpiError> {
    let date = required_date(date)?;
    let range = resolve_day_range(reader, sheets, &date).await?;
    let values = reader.read_range(&range).await?;

    tracing::info!(
        "D410 KPI check: {} → {} ({} rows)",
        date,
        range,
        values.len()
    );

    Ok(CheckKpiResponse {
        ok: true,
        date,
        range,
        values,
    })
}
