use axum::{http::StatusCode, Json};
use contracts::dashboards::d413_kpi_input::{InputAlertsResponse, ERR_INPUT};
use contracts::shared::api_error::StatusErrorBody;

use super::sheets_client;
use crate::dashboards::d413_kpi_input::service;
use crate::dashboards::error::KpiError;
use crate::shared::config;

/// POST /api/input
pub async fn compare_input(
) -> Result<Json<InputAlertsResponse>, (StatusCode, Json<StatusErrorBody>)> {
    load().await.map(Json).map_err(|e| {
        tracing::error!("D413 input check failed: {}", e);
        error_response(&e)
    })
}

async fn load() -> Result<InputAlertsResponse, KpiError> {
    let client = sheets_client()?;
    service::compare_input(client.as_ref(), &config::get().sheets).await
}

fn error_response(e: &KpiError) -> (StatusCode, Json<StatusErrorBody>) {
    (
        e.status_code(),
        Json(StatusErrorBody::new(ERR_INPUT, e.to_string())),
    )
}
