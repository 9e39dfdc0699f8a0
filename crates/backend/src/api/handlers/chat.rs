use axum::Json;
use contracts::shared::chat::{ChatRequest, ChatResponse};

/// POST /api/chat
///
/// Echoes the message back.
pub async fn echo(Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    Json(ChatResponse {
        reply: request.message,
    })
}
