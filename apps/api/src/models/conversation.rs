use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-session turn-count and flag state. At most one row per `conv_key`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRow {
    pub id: Uuid,
    pub conv_key: String,
    pub user_name: Option<String>,
    pub message_count: i32,
    pub has_notified: bool,
    pub has_asked_for_details: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One side of an exchange. Messages are written in visitor/assistant pairs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MessageRow {
    pub id: Uuid,
    pub conv_key: String,
    pub message: String,
    /// "user" or "bot".
    pub role: String,
    pub created_at: DateTime<Utc>,
}
