use serde::{Deserialize, Serialize};

/// Error body for endpoints that use the `ok` discriminator
///
/// `{"ok": false, "error": "DATE_NOT_FOUND", "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub ok: bool,
    pub error: String,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Error body for endpoints that use the `status` discriminator
///
/// `{"status": "error", "code": "DATE_NOT_FOUND", "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusErrorBody {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl StatusErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            code: code.into(),
            message: message.into(),
        }
    }
}
