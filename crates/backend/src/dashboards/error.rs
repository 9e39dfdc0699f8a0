use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::sheets::SheetsError;

/// Ошибки KPI-дашбордов
#[derive(Debug, Error)]
pub enum KpiError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("no KPI range configured for date {0}")]
    DateNotFound(String),

    #[error("range not found in spreadsheet: {0}")]
    RangeNotFound(String),

    #[error("credentials error: {0}")]
    Auth(String),

    #[error("spreadsheet request failed: {0}")]
    Upstream(String),
}

impl KpiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            KpiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            KpiError::DateNotFound(_) | KpiError::RangeNotFound(_) => StatusCode::NOT_FOUND,
            KpiError::Auth(_) | KpiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SheetsError> for KpiError {
    fn from(e: SheetsError) -> Self {
        match e {
            SheetsError::Credentials(inner) => KpiError::Auth(inner.to_string()),
            SheetsError::Auth(msg) => KpiError::Auth(msg),
            SheetsError::NotFound(range) => KpiError::RangeNotFound(range),
            SheetsError::Upstream(msg) => KpiError::Upstream(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::credentials::CredentialError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            KpiError::MissingParameter("date").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            KpiError::DateNotFound("01/01/2099".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            KpiError::from(SheetsError::NotFound("KPI!A1".into())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            KpiError::from(SheetsError::Credentials(CredentialError::Missing)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            KpiError::from(SheetsError::Upstream("503".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
