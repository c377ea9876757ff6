use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/portfolio/introduction
pub async fn handle_introduction(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": state.profile.introduction()
    }))
}

/// GET /api/portfolio
/// The full profile bundle, with projects in their stripped listing form.
pub async fn handle_portfolio(State(state): State<AppState>) -> Json<Value> {
    let profile = &state.profile;
    Json(json!({
        "success": true,
        "data": {
            "introduction": profile.introduction(),
            "educations": profile.educations(),
            "skills": profile.skills(),
            "projects": profile.all_projects(),
            "experiences": profile.experiences(),
            "extracurricularActivities": profile.activities(),
            "socialLinks": profile.social_links()
        }
    }))
}
