use reqwest::StatusCode;
use thiserror::Error;

use super::credentials::CredentialError;

/// Ошибки чтения диапазонов Google Sheets
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("range not found: {0}")]
    NotFound(String),

    #[error("Sheets API error: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for SheetsError {
    fn from(e: reqwest::Error) -> Self {
        SheetsError::Upstream(e.to_string())
    }
}

/// Maps a non-success Sheets API response onto the error taxonomy
pub fn classify_failure(status: StatusCode, range: &str, body: &str) -> SheetsError {
    let preview: String = body.chars().take(300).collect();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SheetsError::Auth(format!("{} for range {}: {}", status, range, preview))
        }
        StatusCode::NOT_FOUND => SheetsError::NotFound(range.to_string()),
        // Unknown sheet names come back as 400 INVALID_ARGUMENT
        StatusCode::BAD_REQUEST if body.contains("Unable to parse range") => {
            SheetsError::NotFound(range.to_string())
        }
        _ => SheetsError::Upstream(format!("{} for range {}: {}", status, range, preview)),
    }
}
