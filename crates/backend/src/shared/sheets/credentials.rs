use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use thiserror::Error;

/// Combined service account JSON, raw or base64, in priority order
pub const SERVICE_ACCOUNT_JSON_VARS: &[&str] = &[
    "GOOGLE_SERVICE_ACCOUNT_JSON",
    "GOOGLE_SERVICE_ACCOUNT_BASE64",
    "GOOGLE_SERVICE_ACCOUNT_KEY",
    "GOOGLE_CREDENTIALS_JSON",
];

pub const CLIENT_EMAIL_VARS: &[&str] = &["GOOGLE_SERVICE_ACCOUNT_EMAIL", "GOOGLE_CLIENT_EMAIL"];

pub const PRIVATE_KEY_VARS: &[&str] = &["GOOGLE_PRIVATE_KEY", "GOOGLE_PRIVATE_KEY_BASE64"];

pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const PEM_MARKER: &str = "-----BEGIN";

/// Ошибки разбора учётных данных сервисного аккаунта
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("no Google service account credentials configured")]
    Missing,

    #[error("{0} is neither JSON nor base64-encoded JSON")]
    UndecodableBlob(String),

    #[error("{var} contains invalid service account JSON: {reason}")]
    InvalidJson { var: String, reason: String },

    #[error("service account email is set but no private key was provided")]
    MissingPrivateKey,

    #[error("private key is set but no service account email was provided")]
    MissingClientEmail,

    #[error("private key has no PEM header")]
    MalformedPrivateKey,
}

/// Service account identity used to sign OAuth2 assertions
#[derive(Clone, Deserialize)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
    #[serde(default)]
    pub project_id: Option<String>,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl std::fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email)
            .field("private_key", &"****")
            .field("token_uri", &self.token_uri)
            .field("project_id", &self.project_id)
            .finish()
    }
}

/// Resolve credentials from the process environment
pub fn from_env() -> Result<ServiceAccountCredentials, CredentialError> {
    resolve_credentials(|name| std::env::var(name).ok())
}

/// Resolve credentials through `lookup`.
///
/// A combined JSON blob wins over separate email/key variables. A blob that
/// is present but broken is reported as such instead of falling through.
pub fn resolve_credentials<F>(lookup: F) -> Result<ServiceAccountCredentials, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    let first_set = |names: &[&'static str]| {
        names.iter().find_map(|name| {
            lookup(*name)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (*name, value))
        })
    };

    if let Some((var, blob)) = first_set(SERVICE_ACCOUNT_JSON_VARS) {
        tracing::debug!("Using service account JSON from {}", var);
        return from_json_blob(var, &blob);
    }

    let email = first_set(CLIENT_EMAIL_VARS)
        .map(|(_, value)| decode_if_base64(&value, |text| text.contains('@')));
    let key = first_set(PRIVATE_KEY_VARS)
        .map(|(_, value)| decode_if_base64(&value, |text| text.contains(PEM_MARKER)));

    match (email, key) {
        (None, None) => Err(CredentialError::Missing),
        (Some(_), None) => Err(CredentialError::MissingPrivateKey),
        (None, Some(_)) => Err(CredentialError::MissingClientEmail),
        (Some(email), Some(key)) => {
            let credentials = ServiceAccountCredentials {
                client_email: strip_quotes(&email).to_string(),
                private_key: normalize_private_key(&key),
                token_uri: default_token_uri(),
                project_id: None,
            };
            validate(credentials)
        }
    }
}

fn from_json_blob(var: &str, blob: &str) -> Result<ServiceAccountCredentials, CredentialError> {
    let text = decode_if_base64(blob, |text| text.starts_with('{'));
    if !text.starts_with('{') {
        return Err(CredentialError::UndecodableBlob(var.to_string()));
    }

    let mut credentials: ServiceAccountCredentials =
        serde_json::from_str(&text).map_err(|e| CredentialError::InvalidJson {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
    credentials.private_key = normalize_private_key(&credentials.private_key);
    if credentials.token_uri.trim().is_empty() {
        credentials.token_uri = default_token_uri();
    }
    validate(credentials)
}

fn validate(
    credentials: ServiceAccountCredentials,
) -> Result<ServiceAccountCredentials, CredentialError> {
    if credentials.client_email.trim().is_empty() {
        return Err(CredentialError::MissingClientEmail);
    }
    if !credentials.private_key.contains(PEM_MARKER) {
        return Err(CredentialError::MalformedPrivateKey);
    }
    Ok(credentials)
}

/// Returns the trimmed value if it already looks decoded, otherwise the
/// base64-decoded text when that looks decoded. Falls back to the input.
fn decode_if_base64(value: &str, looks_decoded: impl Fn(&str) -> bool) -> String {
    let trimmed = strip_quotes(value);
    if looks_decoded(trimmed) {
        return trimmed.to_string();
    }

    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    let engines = [
        &general_purpose::STANDARD,
        &general_purpose::STANDARD_NO_PAD,
        &general_purpose::URL_SAFE,
        &general_purpose::URL_SAFE_NO_PAD,
    ];
    engines
        .iter()
        .filter_map(|engine| engine.decode(compact.as_bytes()).ok())
        .filter_map(|bytes| String::from_utf8(bytes).ok())
        .map(|text| text.trim().to_string())
        .find(|text| looks_decoded(text))
        .unwrap_or_else(|| trimmed.to_string())
}

fn strip_quotes(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return value[1..value.len() - 1].trim();
        }
    }
    value
}

/// Literal `\n` becomes a newline, carriage returns are dropped
pub fn normalize_private_key(key: &str) -> String {
    let key = strip_quotes(key).replace("\\n", "\n").replace('\r', "");
    if key.ends_with('\n') {
        key
    } else {
        format!("{}\n", key)
    }
}
