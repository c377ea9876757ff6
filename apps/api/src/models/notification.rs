use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A captured lead. At most one per conversation, guarded by the
/// conversation's `has_notified` flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRow {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub company: Option<String>,
    pub designation: Option<String>,
    pub conv_key: String,
    pub is_contacted: bool,
    pub created_at: DateTime<Utc>,
}
