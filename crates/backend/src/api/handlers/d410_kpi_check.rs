use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d410_kpi_check::{
    CheckKpiRequest, CheckKpiResponse, ERR_CHECK_KPI, ERR_DATE_NOT_FOUND, ERR_MISSING_DATE,
};
use contracts::shared::api_error::ApiErrorBody;

use super::sheets_client;
use crate::dashboards::common::required_date;
use crate::dashboards::d410_kpi_check::service;
use crate::dashboards::error::KpiError;
use crate::shared::config;

/// GET /api/check-kpi?date=23/12/2025
pub async fn check_kpi(
    Query(request): Query<CheckKpiRequest>,
) -> Result<Json<CheckKpiResponse>, (StatusCode, Json<ApiErrorBody>)> {
    load(request.date.as_deref()).await.map(Json).map_err(|e| {
        tracing::error!("D410 KPI check failed: {}", e);
        error_response(&e)
    })
}

async fn load(date: Option<&str>) -> Result<CheckKpiResponse, KpiError> {
    // Validate before touching credentials so a bad request stays a 400
    let date = required_date(date)?;
    let client = sheets_client()?;
    service::check_kpi(client.as_ref(), &config::get().sheets, Some(&date)).await
}

fn error_code(e: &KpiError) -> &'static str {
    match e {
        KpiError::MissingParameter(_) => ERR_MISSING_DATE,
        KpiError::DateNotFound(_) => ERR_DATE_NOT_FOUND,
        _ => ERR_CHECK_KPI,
    }
}

fn error_response(e: &KpiError) -> (StatusCode, Json<ApiErrorBody>) {
    (
        e.status_code(),
        Json(ApiErrorBody::new(error_code(e), e.to_string())),
    )
}
