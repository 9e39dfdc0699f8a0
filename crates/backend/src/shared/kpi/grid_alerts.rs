use contracts::dashboards::d412_kpi_v2::KpiStatus;
use contracts::shared::grid::Grid;

use super::cells::{cell_at, cell_number, is_blank};
use crate::shared::format::format_quantity;
use crate::shared::sheets::a1::CellOrigin;

/// Cell-by-cell plan vs actual alerts.
///
/// Positions cover the union of both grid shapes; positions blank in both
/// grids produce nothing. Labels use the actual grid's A1 address when
/// `origin` is known, otherwise a 1-based row/column pair.
pub fn compare_grids(plan: &Grid, actual: &Grid, origin: Option<CellOrigin>) -> Vec<String> {
    let rows = plan.len().max(actual.len());
    let mut alerts = Vec::new();

    for r in 0..rows {
        let plan_row = plan.get(r).map(Vec::as_slice).unwrap_or(&[]);
        let actual_row = actual.get(r).map(Vec::as_slice).unwrap_or(&[]);
        let cols = plan_row.len().max(actual_row.len());

        for c in 0..cols {
            let plan_cell = cell_at(plan_row, c);
            let actual_cell = cell_at(actual_row, c);
            if is_blank(plan_cell) && is_blank(actual_cell) {
                continue;
            }

            let label = match origin {
                Some(o) => o.address(r, c),
                None => format!("row {}, col {}", r + 1, c + 1),
            };
            alerts.push(alert_message(
                &label,
                cell_number(plan_cell),
                cell_number(actual_cell),
            ));
        }
    }

    alerts
}

fn alert_message(label: &str, plan: f64, actual: f64) -> String {
    let diff = actual - plan;
    match KpiStatus::from_diff(diff) {
        KpiStatus::Lack => format!(
            "{}: shortfall of {} (plan {}, actual {})",
            label,
            format_quantity(-diff),
            format_quantity(plan),
            format_quantity(actual)
        ),
        KpiStatus::Over => format!(
            "{}: excess of {} (plan {}, actual {})",
            label,
            format_quantity(diff),
            format_quantity(plan),
            format_quantity(actual)
        ),
        KpiStatus::Equal => format!("{}: on target ({})", label, format_quantity(actual)),
    }
}
