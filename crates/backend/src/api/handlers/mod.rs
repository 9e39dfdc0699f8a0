// KPI dashboards (d410-d413)
pub mod d410_kpi_check;
pub mod d411_kpi_config;
pub mod d412_kpi_v2;
pub mod d413_kpi_input;

// Misc
pub mod chat;

use std::sync::Arc;

use crate::dashboards::error::KpiError;
use crate::shared::config;
use crate::shared::sheets::{registry, SheetsClient};

/// Shared Sheets client for the current configuration
pub(crate) fn sheets_client() -> Result<Arc<SheetsClient>, KpiError> {
    registry::client(&config::get().sheets).map_err(KpiError::from)
}
