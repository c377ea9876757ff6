use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Portfolio Chatbot API is running",
        "portfolioName": state.config.portfolio_name,
        "timestamp": Utc::now().to_rfc3339()
    }))
}
