use async_trait::async_trait;
use chrono::Utc;
use contracts::shared::grid::Grid;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::auth::{self, AccessToken};
use super::credentials::ServiceAccountCredentials;
use super::error::{classify_failure, SheetsError};

/// Source of raw cell grids for A1 ranges
#[async_trait]
pub trait RangeReader: Send + Sync {
    async fn read_range(&self, range: &str) -> Result<Grid, SheetsError>;
}

/// HTTP-клиент для Google Sheets API v4 (только чтение)
pub struct SheetsClient {
    http: reqwest::Client,
    credentials: ServiceAccountCredentials,
    spreadsheet_id: String,
    base_url: String,
    token: Mutex<Option<AccessToken>>,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Grid,
}

impl SheetsClient {
    pub fn new(
        credentials: ServiceAccountCredentials,
        spreadsheet_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            credentials,
            spreadsheet_id: spreadsheet_id.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.credentials.client_email
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(range)
        )
    }

    /// Cached access token, refreshed shortly before it expires
    async fn access_token(&self) -> Result<String, SheetsError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let token = auth::fetch_access_token(&self.http, &self.credentials).await?;
        tracing::info!(
            "Obtained Sheets access token for {}, valid until {}",
            self.credentials.client_email,
            token.expires_at.format("%H:%M:%S")
        );
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }
}

#[async_trait]
impl RangeReader for SheetsClient {
    async fn read_range(&self, range: &str) -> Result<Grid, SheetsError> {
        let token = self.access_token().await?;
        let url = self.values_url(range);

        tracing::debug!("GET values for range {}", range);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .header("Accept", "application/json")
            .query(&[("majorDimension", "ROWS")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Sheets API request for {} failed: {} {}", range, status, body);
            return Err(classify_failure(status, range, &body));
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| SheetsError::Upstream(format!("unreadable values response: {}", e)))?;

        tracing::debug!("Range {} returned {} rows", range, body.values.len());
        Ok(body.values)
    }
}
