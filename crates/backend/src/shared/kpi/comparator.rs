use contracts::dashboards::d412_kpi_v2::{HourRecord, KpiStatus, LineSummary};
use contracts::shared::grid::{Cell, Grid};
use std::collections::HashMap;

use super::cells::{cell_at, cell_number, cell_text};

/// Day efficiency a line has to reach, in percent
pub const EFFICIENCY_TARGET_PCT: f64 = 90.0;

const COL_HOUR: usize = 0;
const COL_LINE: usize = 1;
const COL_PLAN: usize = 2;
const COL_ACTUAL: usize = 3;
const COL_DIFF: usize = 4;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiComparison {
    pub hour_records: Vec<HourRecord>,
    pub line_summaries: Vec<LineSummary>,
}

/// Compare plan and actual per hour and per line.
///
/// Row 0 is the header. Columns: hour, line, cumulative plan, cumulative
/// actual, optional diff. Rows without an hour or line label are skipped.
pub fn compare(grid: &Grid) -> KpiComparison {
    let hour_records: Vec<HourRecord> = grid
        .iter()
        .skip(1)
        .filter_map(|row| hour_record(row))
        .collect();
    let line_summaries = summarize_lines(&hour_records);
    KpiComparison {
        hour_records,
        line_summaries,
    }
}

fn hour_record(row: &[Cell]) -> Option<HourRecord> {
    let hour = cell_text(cell_at(row, COL_HOUR));
    let line = cell_text(cell_at(row, COL_LINE));
    if hour.is_empty() || line.is_empty() {
        return None;
    }

    let plan = cell_number(cell_at(row, COL_PLAN));
    let actual = cell_number(cell_at(row, COL_ACTUAL));
    let explicit_diff = cell_number(cell_at(row, COL_DIFF));
    // A zero diff column next to real numbers means the sheet left it blank
    let diff = if explicit_diff == 0.0 && (plan != 0.0 || actual != 0.0) {
        actual - plan
    } else {
        explicit_diff
    };

    Some(HourRecord {
        hour,
        line,
        plan,
        actual,
        diff,
        status: KpiStatus::from_diff(diff),
    })
}

/// Totals per line in order of first appearance
pub fn summarize_lines(records: &[HourRecord]) -> Vec<LineSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<&str, (f64, f64)> = HashMap::new();

    for record in records {
        let entry = totals.entry(record.line.as_str()).or_insert_with(|| {
            order.push(record.line.clone());
            (0.0, 0.0)
        });
        entry.0 += record.plan;
        entry.1 += record.actual;
    }

    order
        .into_iter()
        .map(|line| {
            let (plan_total, actual_total) =
                totals.get(line.as_str()).copied().unwrap_or_default();
            let efficiency_pct = efficiency(plan_total, actual_total);
            LineSummary {
                line,
                plan_total,
                actual_total,
                efficiency_pct,
                status: KpiStatus::from_diff(efficiency_pct - EFFICIENCY_TARGET_PCT),
            }
        })
        .collect()
}

/// `actual / plan * 100` rounded to two decimals.
///
/// A zero plan yields 0, so "no plan" reads as 0% efficiency.
pub fn efficiency(plan: f64, actual: f64) -> f64 {
    if plan == 0.0 {
        return 0.0;
    }
    round2(actual / plan * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn header() -> Vec<Value> {
        vec![
            json!("Giờ"),
            json!("Chuyền"),
            json!("Kế hoạch"),
            json!("Thực tế"),
            json!("Chênh lệch"),
        ]
    }

    #[test]
    fn test_status_tri_state() {
        let grid = vec![
            header(),
            vec![json!("8h"), json!("L1"), json!("100"), json!("100")],
            vec![json!("9h"), json!("L1"), json!("100"), json!("120")],
            vec![json!("10h"), json!("L1"), json!("100"), json!("85")],
        ];
        let result = compare(&grid);
        let statuses: Vec<_> = result.hour_records.iter().map(|r| (r.status, r.diff)).collect();
        assert_eq!(
            statuses,
            vec![
                (KpiStatus::Equal, 0.0),
                (KpiStatus::Over, 20.0),
                (KpiStatus::Lack, -15.0)
            ]
        );
    }

    #[test]
    fn test_explicit_diff_column() {
        let grid = vec![
            header(),
            // Non-zero diff column is taken as-is
            vec![json!("8h"), json!("L1"), json!("100"), json!("90"), json!("-12")],
            // Zero diff with real numbers is recomputed
            vec![json!("9h"), json!("L1"), json!("100"), json!("90"), json!("0")],
            // All zero stays zero
            vec![json!("10h"), json!("L1"), json!(""), json!(""), json!("0")],
        ];
        let records = compare(&grid).hour_records;
        assert_eq!(records[0].diff, -12.0);
        assert_eq!(records[1].diff, -10.0);
        assert_eq!(records[2].diff, 0.0);
        assert_eq!(records[2].status, KpiStatus::Equal);
    }

    #[test]
    fn test_rows_without_labels_are_skipped() {
        let grid = vec![
            header(),
            vec![json!(""), json!("L1"), json!("100"), json!("100")],
            vec![json!("8h"), Value::Null, json!("100"), json!("100")],
            vec![json!("8h")],
            vec![],
            vec![json!("9h"), json!("L2"), json!("1,000"), json!("950")],
        ];
        let result = compare(&grid);
        assert_eq!(result.hour_records.len(), 1);
        assert_eq!(result.hour_records[0].plan, 1000.0);
    }

    #[test]
    fn test_header_only_grid() {
        assert_eq!(compare(&vec![header()]), KpiComparison::default());
        assert_eq!(compare(&Vec::new()), KpiComparison::default());
    }

    #[test]
    fn test_line_efficiency() {
        let grid = vec![
            header(),
            vec![json!("8h"), json!("L1"), json!("100"), json!("95")],
            vec![json!("8h"), json!("L2"), json!("0"), json!("5")],
            vec![json!("9h"), json!("L1"), json!("100"), json!("95")],
            vec![json!("9h"), json!("L3"), json!("300"), json!("200")],
        ];
        let summaries = compare(&grid).line_summaries;
        let lines: Vec<_> = summaries.iter().map(|s| s.line.as_str()).collect();
        assert_eq!(lines, vec!["L1", "L2", "L3"]);

        assert_eq!(summaries[0].plan_total, 200.0);
        assert_eq!(summaries[0].actual_total, 190.0);
        assert_eq!(summaries[0].efficiency_pct, 95.0);
        assert_eq!(summaries[0].status, KpiStatus::Over);

        // Zero plan: 0%, never NaN or infinity
        assert_eq!(summaries[1].efficiency_pct, 0.0);
        assert_eq!(summaries[1].status, KpiStatus::Lack);

        assert_eq!(summaries[2].efficiency_pct, 66.67);
        assert_eq!(summaries[2].status, KpiStatus::Lack);
    }

    #[test]
    fn test_efficiency_exactly_on_target() {
        assert_eq!(efficiency(200.0, 180.0), 90.0);
        let records = vec![HourRecord {
            hour: "8h".to_string(),
            line: "L1".to_string(),
            plan: 200.0,
            actual: 180.0,
            diff: -20.0,
            status: KpiStatus::Lack,
        }];
        assert_eq!(summarize_lines(&records)[0].status, KpiStatus::Equal);
    }
}
