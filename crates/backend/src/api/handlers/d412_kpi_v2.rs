use axum::{body::Bytes, extract::Query, http::StatusCode, Json};
use contracts::dashboards::d412_kpi_v2::{
    KpiV2Request, KpiV2Response, ERR_DATE_NOT_FOUND, ERR_KPI_V2, ERR_MISSING_DATE,
};
use contracts::shared::api_error::StatusErrorBody;

use super::sheets_client;
use crate::dashboards::common::required_date;
use crate::dashboards::d412_kpi_v2::service;
use crate::dashboards::error::KpiError;
use crate::shared::config;

type V2Result = Result<Json<KpiV2Response>, (StatusCode, Json<StatusErrorBody>)>;

/// GET /api/kpi-v2?date=23/12/2025
pub async fn get_kpi_v2(Query(request): Query<KpiV2Request>) -> V2Result {
    run(request.date.as_deref()).await
}

/// POST /api/kpi-v2 with `{"date": "23/12/2025"}`; the query string is used
/// when the body has no date.
pub async fn post_kpi_v2(Query(query): Query<KpiV2Request>, body: Bytes) -> V2Result {
    let date = body_date(&body).or(query.date);
    run(date.as_deref()).await
}

fn body_date(body: &[u8]) -> Option<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    match serde_json::from_slice::<KpiV2Request>(body) {
        Ok(request) => request.date,
        Err(e) => {
            tracing::warn!("D412 KPI v2: ignoring unreadable request body: {}", e);
            None
        }
    }
}

async fn run(date: Option<&str>) -> V2Result {
    load(date).await.map(Json).map_err(|e| {
        tracing::error!("D412 KPI v2 failed: {}", e);
        error_response(&e)
    })
}

async fn load(date: Option<&str>) -> Result<KpiV2Response, KpiError> {
    let date = required_date(date)?;
    let client = sheets_client()?;
    service::evaluate(client.as_ref(), &config::get().sheets, Some(&date)).await
}

fn error_response(e: &KpiError) -> (StatusCode, Json<StatusErrorBody>) {
    let code = match e {
        KpiError::MissingParameter(_) => ERR_MISSING_DATE,
        KpiError::DateNotFound(_) => ERR_DATE_NOT_FOUND,
        _ => ERR_KPI_V2,
    };
    (
        e.status_code(),
        Json(StatusErrorBody::new(code, e.to_string())),
    )
}
