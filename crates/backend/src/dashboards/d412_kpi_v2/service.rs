use contracts::dashboards::d412_kpi_v2::KpiV2Response;

use crate::dashboards::common::{required_date, resolve_day_range};
use crate::dashboards::error::KpiError;
use crate::shared::config::SheetsConfig;
use crate::shared::kpi::comparator;
use crate::shared::sheets::RangeReader;

/// Hour and day alerts for one date
pub async fn evaluate(
    reader: &dyn RangeReader,
    sheets: &SheetsConfig,
    date: Option<&str>,
) -> Result<KpiV2Response, KpiError> {
    let date = required_date(date)?;
    let range = resolve_day_range(reader, sheets, &date).await?;
    let grid = reader.read_range(&range).await?;
    let comparison = comparator::compare(&grid);

    tracing::info!(
        "D412 KPI v2: {} → {}, {} hour records, {} lines",
        date,
        range,
        comparison.hour_records.len(),
        comparison.line_summaries.len()
    );

    Ok(KpiV2Response {
        status: "success".to_string(),
        date,
        range,
        hour_alerts: comparison.hour_records,
        day_alerts: comparison.line_summaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::memory::MemoryReader;
    use contracts::dashboards::d412_kpi_v2::KpiStatus;
    use serde_json::json;

    fn reader() -> MemoryReader {
        MemoryReader::new()
            .with_range(
                "CONFIG_KPI!A:B",
                vec![vec![json!(46014), json!("A19:AZ37")]],
            )
            .with_range(
                "KPI!A19:AZ37",
                vec![
                    vec![json!("Giờ"), json!("Chuyền"), json!("KH lũy kế"), json!("TH lũy kế")],
                    vec![json!("8h-9h"), json!("Chuyền 1"), json!("100"), json!("95")],
                    vec![json!("9h-10h"), json!("Chuyền 1"), json!("100"), json!("95")],
                    vec![json!("8h-9h"), json!("Chuyền 2"), json!("50"), json!("40")],
                    vec![json!(""), json!(""), json!("Tổng"), json!("230")],
                ],
            )
    }

    #[tokio::test]
    async fn test_evaluate() {
        let resp = evaluate(&reader(), &SheetsConfig::default(), Some("23/12/2025"))
            .await
            .unwrap();

        assert_eq!(resp.status, "success");
        assert_eq!(resp.range, "KPI!A19:AZ37");
        assert_eq!(resp.hour_alerts.len(), 3);
        assert_eq!(resp.hour_alerts[0].diff, -5.0);
        assert_eq!(resp.hour_alerts[0].status, KpiStatus::Lack);

        assert_eq!(resp.day_alerts.len(), 2);
        assert_eq!(resp.day_alerts[0].line, "Chuyền 1");
        assert_eq!(resp.day_alerts[0].efficiency_pct, 95.0);
        assert_eq!(resp.day_alerts[0].status, KpiStatus::Over);
        assert_eq!(resp.day_alerts[1].efficiency_pct, 80.0);
        assert_eq!(resp.day_alerts[1].status, KpiStatus::Lack);
    }

    #[tokio::test]
    async fn test_evaluate_errors() {
        let sheets = SheetsConfig::default();
        assert!(matches!(
            evaluate(&reader(), &sheets, Some("")).await,
            Err(KpiError::MissingParameter(_))
        ));
        assert!(matches!(
            evaluate(&reader(), &sheets, Some("01/01/2099")).await,
            Err(KpiError::DateNotFound(_))
        ));

        let broken = reader().with_broken_range("KPI!A19:AZ37");
        assert!(matches!(
            evaluate(&broken, &sheets, Some("23/12/2025")).await,
            Err(KpiError::Upstream(_))
        ));
    }
}
