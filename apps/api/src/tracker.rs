//! Conversation Tracker — persisted per-session message counts and flags,
//! plus the `notify` lead-capture path.
//!
//! Storage failures here are logged and swallowed: a broken tracker must
//! never take down a chat turn.

use sqlx::PgPool;
use tracing::error;

use crate::contact::ContactInfo;
use crate::models::{ConversationRow, NotificationRow};

/// Looks up the conversation for a session key. Returns `None` both for
/// missing conversations and for storage failures.
pub async fn get_conversation(db: &PgPool, conv_key: &str) -> Option<ConversationRow> {
    let result: Result<Option<ConversationRow>, sqlx::Error> =
        sqlx::query_as("SELECT * FROM conversations WHERE conv_key = $1")
            .bind(conv_key)
            .fetch_optional(db)
            .await;

    match result {
        Ok(row) => row,
        Err(e) => {
            error!("Failed to load conversation {conv_key}: {e}");
            None
        }
    }
}

/// Appends one visitor and one assistant message, then bumps the
/// conversation's message count by exactly one (creating it with count 1 if
/// absent). The writes are sequential, not atomic.
pub async fn track_exchange(
    db: &PgPool,
    conv_key: &str,
    user_text: &str,
    assistant_text: &str,
) -> Option<ConversationRow> {
    let result = async {
        sqlx::query("INSERT INTO messages (conv_key, message, role) VALUES ($1, $2, 'user')")
            .bind(conv_key)
            .bind(user_text)
            .execute(db)
            .await?;

        sqlx::query("INSERT INTO messages (conv_key, message, role) VALUES ($1, $2, 'bot')")
            .bind(conv_key)
            .bind(assistant_text)
            .execute(db)
            .await?;

        let conversation: ConversationRow = sqlx::query_as(
            r#"
            INSERT INTO conversations (conv_key, message_count)
            VALUES ($1, 1)
            ON CONFLICT (conv_key) DO UPDATE
                SET message_count = conversations.message_count + 1,
                    updated_at = now()
            RETURNING *
            "#,
        )
        .bind(conv_key)
        .fetch_one(db)
        .await?;

        Ok::<_, sqlx::Error>(conversation)
    }
    .await;

    match result {
        Ok(conversation) => Some(conversation),
        Err(e) => {
            error!("Failed to track exchange for {conv_key}: {e}");
            None
        }
    }
}

/// Idempotent flip of the asked-for-details flag.
pub async fn mark_asked_for_details(db: &PgPool, conv_key: &str) {
    if let Err(e) =
        sqlx::query("UPDATE conversations SET has_asked_for_details = TRUE, updated_at = now() WHERE conv_key = $1")
            .bind(conv_key)
            .execute(db)
            .await
    {
        error!("Failed to mark asked-for-details for {conv_key}: {e}");
    }
}

/// Idempotent flip of the notified flag.
pub async fn mark_notified(db: &PgPool, conv_key: &str) {
    if let Err(e) =
        sqlx::query("UPDATE conversations SET has_notified = TRUE, updated_at = now() WHERE conv_key = $1")
            .bind(conv_key)
            .execute(db)
            .await
    {
        error!("Failed to mark notified for {conv_key}: {e}");
    }
}

/// Files a notification for a captured lead. Fails soft: every outcome is a
/// human-readable string, never an error to the caller.
///
/// At most one notification per conversation, guarded by `has_notified`.
pub async fn notify(
    db: &PgPool,
    info: &ContactInfo,
    conv_key: &str,
    portfolio_name: &str,
) -> String {
    let conversation = get_conversation(db, conv_key).await;

    if conversation.as_ref().is_some_and(|c| c.has_notified) {
        return already_notified_message(portfolio_name);
    }

    let (name, phone) = match (&info.name, &info.phone) {
        (Some(name), Some(phone)) => (name, phone),
        _ => return "Please provide at least your name and phone number.".to_string(),
    };

    let inserted: Result<NotificationRow, sqlx::Error> = sqlx::query_as(
        r#"
        INSERT INTO notifications (name, email, phone, company, designation, conv_key)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(&info.email)
    .bind(phone)
    .bind(&info.company)
    .bind(&info.designation)
    .bind(conv_key)
    .fetch_one(db)
    .await;

    match inserted {
        Ok(_) => {
            mark_notified(db, conv_key).await;
            confirmation_message(portfolio_name, name, phone, info.email.as_deref())
        }
        Err(e) => {
            error!("Error saving notification for {conv_key}: {e}");
            "There was an error processing your request. Please try again.".to_string()
        }
    }
}

fn already_notified_message(portfolio_name: &str) -> String {
    format!("I've already notified {portfolio_name} with your details. Please wait for a response!")
}

fn confirmation_message(
    portfolio_name: &str,
    name: &str,
    phone: &str,
    email: Option<&str>,
) -> String {
    let channel = match email {
        Some(email) if !email.is_empty() => format!("{phone} or {email}"),
        _ => phone.to_string(),
    };
    format!(
        "Thank you {name}! I've notified {portfolio_name} about your interest. \
         He will reach out to you soon at {channel}."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_message_embeds_phone_channel() {
        let msg = confirmation_message("Anish", "Priya", "9876543210", None);
        assert!(msg.contains("Priya"));
        assert!(msg.contains("9876543210"));
        assert!(msg.contains("Anish"));
    }

    #[test]
    fn test_confirmation_message_embeds_email_channel() {
        let msg = confirmation_message("Anish", "Priya", "9876543210", Some("p@q.com"));
        assert!(msg.contains("9876543210 or p@q.com"));
    }

    #[test]
    fn test_already_notified_message_is_distinct() {
        let confirmed = confirmation_message("Anish", "Priya", "9876543210", None);
        let repeated = already_notified_message("Anish");
        assert_ne!(confirmed, repeated);
        assert!(repeated.contains("already notified"));
    }
}
