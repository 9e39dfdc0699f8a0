use serde::{Deserialize, Serialize};

pub const ERR_INPUT: &str = "INPUT_COMPARE_ERROR";

/// POST /api/input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputAlertsResponse {
    /// Always "success"; errors use `StatusErrorBody`
    pub status: String,
    pub alerts: Vec<String>,
}
