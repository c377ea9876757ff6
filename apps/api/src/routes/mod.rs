pub mod chat;
pub mod conversations;
pub mod github;
pub mod health;
pub mod notifications;
pub mod portfolio;
pub mod stats;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::state::AppState;

/// `limit`/`skip` query parameters shared by the listing endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

impl Pagination {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).max(0)
    }

    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }
}

/// Whether a listing page leaves rows beyond `skip + returned`.
pub fn has_more(skip: i64, returned: usize, total: i64) -> bool {
    skip + (returned as i64) < total
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/portfolio/introduction",
            get(portfolio::handle_introduction),
        )
        .route("/api/portfolio", get(portfolio::handle_portfolio))
        .route("/api/chat", post(chat::handle_chat))
        .route("/api/conversations", get(conversations::handle_list))
        .route(
            "/api/conversations/:conv_key",
            get(conversations::handle_get).delete(conversations::handle_delete),
        )
        .route("/api/notifications", get(notifications::handle_list))
        .route(
            "/api/notifications/:id",
            get(notifications::handle_get)
                .put(notifications::handle_update)
                .delete(notifications::handle_delete),
        )
        .route("/api/stats", get(stats::handle_stats))
        .route("/api/github/activities", get(github::handle_activities))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let p = Pagination {
            limit: None,
            skip: None,
        };
        assert_eq!(p.limit_or(50), 50);
        assert_eq!(p.skip(), 0);
    }

    #[test]
    fn test_pagination_clamps_negative_values() {
        let p = Pagination {
            limit: Some(-5),
            skip: Some(-10),
        };
        assert_eq!(p.limit_or(50), 0);
        assert_eq!(p.skip(), 0);
    }

    #[test]
    fn test_has_more_compares_past_current_page() {
        assert!(has_more(0, 50, 51));
        assert!(!has_more(0, 50, 50));
        assert!(has_more(10, 5, 16));
        assert!(!has_more(10, 5, 15));
        assert!(!has_more(0, 0, 0));
    }
}
