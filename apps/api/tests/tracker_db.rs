//! Database-bound tracker tests. Ignored by default since they need a
//! reachable Postgres; run with:
//!
//!   DATABASE_URL=postgres://... cargo test -p api --test tracker_db -- --ignored

use api::contact::ContactInfo;
use api::db::{create_pool, init_schema};
use api::tracker;
use uuid::Uuid;

async fn test_pool() -> sqlx::PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for these tests");
    let pool = create_pool(&url).await.expect("failed to connect to Postgres");
    init_schema(&pool).await.expect("failed to initialize schema");
    pool
}

#[tokio::test]
#[ignore]
async fn track_exchange_bumps_count_once_and_appends_two_messages() {
    let pool = test_pool().await;
    let conv_key = Uuid::new_v4().to_string();

    let first = tracker::track_exchange(&pool, &conv_key, "hi", "hello")
        .await
        .expect("first exchange should persist");
    assert_eq!(first.message_count, 1);

    let second = tracker::track_exchange(&pool, &conv_key, "tell me more", "sure")
        .await
        .expect("second exchange should persist");
    assert_eq!(second.message_count, 2);

    let messages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE conv_key = $1")
        .bind(&conv_key)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(messages, 4);
}

#[tokio::test]
#[ignore]
async fn notify_files_at_most_one_notification_per_session() {
    let pool = test_pool().await;
    let conv_key = Uuid::new_v4().to_string();

    tracker::track_exchange(&pool, &conv_key, "hi", "hello")
        .await
        .expect("exchange should persist");

    let info = ContactInfo {
        name: Some("Priya Sharma".to_string()),
        phone: Some("9876543210".to_string()),
        ..Default::default()
    };

    let first = tracker::notify(&pool, &info, &conv_key, "Anish").await;
    assert!(first.contains("Thank you"));

    let repeated = tracker::notify(&pool, &info, &conv_key, "Anish").await;
    assert!(repeated.contains("already notified"));

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE conv_key = $1")
        .bind(&conv_key)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let conversation = tracker::get_conversation(&pool, &conv_key)
        .await
        .expect("conversation should exist");
    assert!(conversation.has_notified);
}
