//! OAuth2 JWT-bearer flow for service accounts.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::credentials::ServiceAccountCredentials;
use super::error::SheetsError;

pub const SHEETS_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Tokens this close to expiry are refreshed before use
const REFRESH_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

#[derive(Clone)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(REFRESH_MARGIN_SECS) < self.expires_at
    }
}

/// Sign the RS256 assertion exchanged for an access token
pub fn build_assertion(
    credentials: &ServiceAccountCredentials,
    now: DateTime<Utc>,
) -> Result<String, SheetsError> {
    let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
        .map_err(|e| SheetsError::Auth(format!("invalid private key: {}", e)))?;

    let iat = now.timestamp();
    let claims = AssertionClaims {
        iss: credentials.client_email.clone(),
        scope: SHEETS_READONLY_SCOPE.to_string(),
        aud: credentials.token_uri.clone(),
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| SheetsError::Auth(format!("failed to sign assertion: {}", e)))
}

/// Exchange a signed assertion for an access token
pub async fn fetch_access_token(
    http: &reqwest::Client,
    credentials: &ServiceAccountCredentials,
) -> Result<AccessToken, SheetsError> {
    let now = Utc::now();
    let assertion = build_assertion(credentials, now)?;

    tracing::debug!(
        "Requesting access token for {} from {}",
        credentials.client_email,
        credentials.token_uri
    );

    let response = http
        .post(&credentials.token_uri)
        .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::error!("Token exchange failed with status {}: {}", status, body);
        return Err(SheetsError::Auth(format!(
            "token endpoint returned {}",
            status
        )));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| SheetsError::Auth(format!("unreadable token response: {}", e)))?;

    Ok(AccessToken {
        value: token.access_token,
        expires_at: now + Duration::seconds(token.expires_in),
    })
}
