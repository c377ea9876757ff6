use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub conv_key: Option<String>,
}

/// POST /api/chat
/// Runs one chat turn. A fresh session key is generated when `convKey` is
/// omitted and returned so the client can continue the conversation.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<Value>, AppError> {
    let message = req
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Message is required".to_string()))?;

    let conv_key = req
        .conv_key
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let turn = state.engine.handle_turn(&conv_key, &message).await?;

    Ok(Json(json!({
        "success": true,
        "data": turn
    })))
}
