use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::{ConversationRow, NotificationRow};
use crate::state::AppState;

/// GET /api/stats
/// Reporting rollup over the three collections plus a recent-activity slice.
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let total_conversations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversations")
        .fetch_one(&state.db)
        .await?;

    let notified_conversations: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM conversations WHERE has_notified = TRUE")
            .fetch_one(&state.db)
            .await?;

    let total_messages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(&state.db)
        .await?;

    let total_notifications: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications")
        .fetch_one(&state.db)
        .await?;

    let uncontacted_notifications: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE is_contacted = FALSE")
            .fetch_one(&state.db)
            .await?;

    let recent_conversations: Vec<ConversationRow> =
        sqlx::query_as("SELECT * FROM conversations ORDER BY updated_at DESC LIMIT 5")
            .fetch_all(&state.db)
            .await?;

    let recent_notifications: Vec<NotificationRow> =
        sqlx::query_as("SELECT * FROM notifications ORDER BY created_at DESC LIMIT 5")
            .fetch_all(&state.db)
            .await?;

    let average_messages = average_per_conversation(total_messages, total_conversations);

    Ok(Json(json!({
        "success": true,
        "data": {
            "stats": {
                "totalConversations": total_conversations,
                "notifiedConversations": notified_conversations,
                "totalMessages": total_messages,
                "totalNotifications": total_notifications,
                "uncontactedNotifications": uncontacted_notifications,
                "averageMessagesPerConversation": average_messages
            },
            "recentActivity": {
                "recentConversations": recent_conversations,
                "recentNotifications": recent_notifications
            }
        }
    })))
}

/// Average formatted to two decimals, as a string ("3.33"); "0.00" when
/// there are no conversations.
fn average_per_conversation(messages: i64, conversations: i64) -> String {
    if conversations <= 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", messages as f64 / conversations as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_is_a_two_decimal_string() {
        assert_eq!(average_per_conversation(10, 3), "3.33");
        assert_eq!(average_per_conversation(7, 2), "3.50");
    }

    #[test]
    fn test_average_with_no_conversations_is_zero() {
        assert_eq!(average_per_conversation(0, 0), "0.00");
        assert_eq!(average_per_conversation(5, 0), "0.00");
    }

    #[test]
    fn test_average_serializes_as_json_string() {
        let v = serde_json::json!({ "avg": average_per_conversation(10, 3) });
        assert_eq!(v["avg"], serde_json::Value::String("3.33".to_string()));
    }
}
