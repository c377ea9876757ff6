use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::NotificationRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListQuery {
    pub is_contacted: Option<bool>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// GET /api/notifications
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<Value>, AppError> {
    let limit = query.limit.unwrap_or(100).max(0);
    let skip = query.skip.unwrap_or(0).max(0);

    let (notifications, total): (Vec<NotificationRow>, i64) = match query.is_contacted {
        Some(is_contacted) => {
            let rows = sqlx::query_as(
                "SELECT * FROM notifications WHERE is_contacted = $1 \
                 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
            )
            .bind(is_contacted)
            .bind(limit)
            .bind(skip)
            .fetch_all(&state.db)
            .await?;

            let total =
                sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE is_contacted = $1")
                    .bind(is_contacted)
                    .fetch_one(&state.db)
                    .await?;
            (rows, total)
        }
        None => {
            let rows = sqlx::query_as(
                "SELECT * FROM notifications ORDER BY created_at DESC LIMIT $1 OFFSET $2",
            )
            .bind(limit)
            .bind(skip)
            .fetch_all(&state.db)
            .await?;

            let total = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
                .fetch_one(&state.db)
                .await?;
            (rows, total)
        }
    };

    let has_more = super::has_more(skip, notifications.len(), total);

    Ok(Json(json!({
        "success": true,
        "data": {
            "notifications": notifications,
            "pagination": {
                "total": total,
                "limit": limit,
                "skip": skip,
                "hasMore": has_more
            }
        }
    })))
}

/// GET /api/notifications/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let notification: Option<NotificationRow> =
        sqlx::query_as("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&state.db)
            .await?;

    let notification =
        notification.ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok(Json(json!({ "success": true, "data": notification })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUpdate {
    pub is_contacted: bool,
}

/// PUT /api/notifications/:id
/// Marks a lead as contacted (or not).
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<NotificationUpdate>,
) -> Result<Json<Value>, AppError> {
    let notification: Option<NotificationRow> = sqlx::query_as(
        "UPDATE notifications SET is_contacted = $1 WHERE id = $2 RETURNING *",
    )
    .bind(update.is_contacted)
    .bind(id)
    .fetch_optional(&state.db)
    .await?;

    let notification =
        notification.ok_or_else(|| AppError::NotFound("Notification not found".to_string()))?;

    Ok(Json(json!({
        "success": true,
        "data": notification,
        "message": "Notification updated successfully"
    })))
}

/// DELETE /api/notifications/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let deleted = sqlx::query("DELETE FROM notifications WHERE id = $1")
        .bind(id)
        .execute(&state.db)
        .await?;

    if deleted.rows_affected() == 0 {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }

    Ok(Json(json!({
        "success": true,
        "message": "Notification deleted successfully"
    })))
}
