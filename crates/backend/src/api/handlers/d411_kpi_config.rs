use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::dashboards::d411_kpi_config::{
    KpiConfigDatesResponse, KpiConfigMapResponse, KpiConfigRequest, ERR_KPI_CONFIG,
};
use contracts::shared::api_error::ApiErrorBody;

use super::sheets_client;
use crate::dashboards::d411_kpi_config::service;
use crate::dashboards::error::KpiError;
use crate::shared::config;

/// GET /api/kpi-config?list=1 → sorted dates, otherwise the date → range map
pub async fn get_config(Query(request): Query<KpiConfigRequest>) -> Response {
    match load(&request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("D411 KPI config failed: {}", e);
            error_response(&e).into_response()
        }
    }
}

async fn load(request: &KpiConfigRequest) -> Result<Response, KpiError> {
    let client = sheets_client()?;
    let sheets = &config::get().sheets;

    if request.wants_list() {
        let dates = service::list_dates(client.as_ref(), sheets).await?;
        Ok((StatusCode::OK, Json(KpiConfigDatesResponse { ok: true, dates })).into_response())
    } else {
        let map = service::date_map(client.as_ref(), sheets).await?;
        Ok((StatusCode::OK, Json(KpiConfigMapResponse { ok: true, map })).into_response())
    }
}

/// Every failure shares one code; the status still follows the error kind
fn error_response(e: &KpiError) -> (StatusCode, Json<ApiErrorBody>) {
    (
        e.status_code(),
        Json(ApiErrorBody::new(ERR_KPI_CONFIG, e.to_string())),
    )
}
