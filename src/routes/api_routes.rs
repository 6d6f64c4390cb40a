use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::errors::AppError;
use crate::models::{ChatForm, ErrorBody, StatusBody};
use crate::service::chat_service::ChatService;

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET `/`: liveness and endpoint listing
pub async fn home_handler() -> impl IntoResponse {
    Json(json!({
        "message": "DWed Venue Finder API is running!",
        "status": "OK",
        "endpoints": {
            "/api/chat": "POST - Send chat messages to the bot",
            "/api/chat/reset": "POST - Clear conversation history"
        }
    }))
}

/// POST `/api/chat`: `{ message }` in, `{ type, data }` out
pub async fn chat_handler(
    State(svc): State<ChatService>,
    Json(form): Json<ChatForm>,
) -> Response {
    match svc.chat(form).await {
        Ok(reply) => Json(reply).into_response(),
        Err(err) => error_response(&err),
    }
}

/// POST `/api/chat/reset`: forget the conversation history
pub async fn reset_handler(State(svc): State<ChatService>) -> impl IntoResponse {
    svc.reset().await;
    Json(StatusBody {
        message: "Conversation history cleared".to_string(),
        status: "OK",
    })
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        error!("Chat request failed: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}
