use contracts::dashboards::d413_kpi_input::InputAlertsResponse;

use crate::dashboards::error::KpiError;
use crate::shared::config::SheetsConfig;
use crate::shared::kpi::grid_alerts;
use crate::shared::sheets::{a1, RangeReader};

/// Compares the configured plan and actual ranges cell by cell
pub async fn compare_input(
    reader: &dyn RangeReader,
    sheets: &SheetsConfig,
) -> Result<InputAlertsResponse, KpiError> {
    let plan_range = sheets.kpi_range(&sheets.input_plan_range);
    let actual_range = sheets.kpi_range(&sheets.input_actual_range);

    let (plan, actual) = tokio::try_join!(
        reader.read_range(&plan_range),
        reader.read_range(&actual_range)
    )?;

    let alerts = grid_alerts::compare_grids(&plan, &actual, a1::origin(&actual_range));
    tracing::info!(
        "D413 input check: {} vs {} → {} alerts",
        plan_range,
        actual_range,
        alerts.len()
    );

    Ok(InputAlertsResponse {
        status: "success".to_string(),
        alerts,
    })
}
