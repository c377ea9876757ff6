use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{ConversationRow, MessageRow};
use crate::routes::{has_more, Pagination};
use crate::state::AppState;

/// GET /api/conversations
pub async fn handle_list(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> Result<Json<Value>, AppError> {
    let limit = page.limit_or(50);
    let skip = page.skip();

    let conversations: Vec<ConversationRow> =
        sqlx::query_as("SELECT * FROM conversations ORDER BY updated_at DESC LIMIT $1 OFFSET $2")
            .bind(limit)
            .bind(skip)
            .fetch_all(&state.db)
            .await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversations")
        .fetch_one(&state.db)
        .await?;

    let has_more = has_more(skip, conversations.len(), total);

    Ok(Json(json!({
        "success": true,
        "data": {
            "conversations": conversations,
            "pagination": {
                "total": total,
                "limit": limit,
                "skip": skip,
                "hasMore": has_more
            }
        }
    })))
}

/// GET /api/conversations/:convKey
pub async fn handle_get(
    State(state): State<AppState>,
    Path(conv_key): Path<String>,
) -> Result<Json<Value>, AppError> {
    let conversation: Option<ConversationRow> =
        sqlx::query_as("SELECT * FROM conversations WHERE conv_key = $1")
            .bind(&conv_key)
            .fetch_optional(&state.db)
            .await?;

    let conversation = conversation
        .ok_or_else(|| AppError::NotFound("Conversation not found".to_string()))?;

    let messages: Vec<MessageRow> =
        sqlx::query_as("SELECT * FROM messages WHERE conv_key = $1 ORDER BY created_at ASC")
            .bind(&conv_key)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "conversation": conversation,
            "messages": messages
        }
    })))
}

/// DELETE /api/conversations/:convKey
/// Removes the persisted conversation and messages, and evicts the
/// in-memory chat session for the key.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(conv_key): Path<String>,
) -> Result<Json<Value>, AppError> {
    sqlx::query("DELETE FROM conversations WHERE conv_key = $1")
        .bind(&conv_key)
        .execute(&state.db)
        .await?;

    sqlx::query("DELETE FROM messages WHERE conv_key = $1")
        .bind(&conv_key)
        .execute(&state.db)
        .await?;

    state.engine.evict_session(&conv_key);

    Ok(Json(json!({
        "success": true,
        "message": "Conversation deleted successfully"
    })))
}
