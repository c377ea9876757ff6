use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GithubEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: GithubRepo,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct GithubRepo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubActivity {
    pub id: String,
    pub repo_name: String,
    pub repo_full_name: String,
    pub repo_url: String,
    pub created_at: String,
    pub activity_type: String,
}

/// GET /api/github/activities
/// Recent push activity for the configured GitHub user. On upstream failure
/// this responds 500 but still carries an empty `data` array as a fallback.
pub async fn handle_activities(State(state): State<AppState>) -> impl IntoResponse {
    match fetch_push_activities(&state.config.github_username).await {
        Ok(activities) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": activities })),
        ),
        Err(e) => {
            error!("Error fetching GitHub activities: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "success": false, "error": e.to_string(), "data": [] })),
            )
        }
    }
}

async fn fetch_push_activities(username: &str) -> Result<Vec<GithubActivity>, anyhow::Error> {
    let client = reqwest::Client::builder()
        .user_agent("portfolio-chatbot-api")
        .build()?;

    let response = client
        .get(format!("https://api.github.com/users/{username}/events"))
        .send()
        .await?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to fetch GitHub activities");
    }

    let events: Vec<GithubEvent> = response.json().await?;
    Ok(push_activities(events))
}

/// Keeps push events, maps them to the activity shape, dedupes by repo name,
/// and returns at most 5.
fn push_activities(events: Vec<GithubEvent>) -> Vec<GithubActivity> {
    let mut activities: Vec<GithubActivity> = Vec::new();

    for event in events
        .into_iter()
        .filter(|e| e.event_type == "PushEvent")
        .take(10)
    {
        let repo_name = event
            .repo
            .name
            .split('/')
            .nth(1)
            .unwrap_or(&event.repo.name)
            .to_string();

        if activities.iter().any(|a| a.repo_name == repo_name) {
            continue;
        }

        activities.push(GithubActivity {
            id: event.id,
            repo_url: format!("https://github.com/{}", event.repo.name),
            repo_full_name: event.repo.name,
            repo_name,
            created_at: event.created_at,
            activity_type: "Github".to_string(),
        });
    }

    activities.truncate(5);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_event(id: &str, repo: &str) -> GithubEvent {
        GithubEvent {
            id: id.to_string(),
            event_type: "PushEvent".to_string(),
            repo: GithubRepo {
                name: repo.to_string(),
            },
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_non_push_events_are_dropped() {
        let mut star = push_event("1", "7anish/portfolio");
        star.event_type = "WatchEvent".to_string();
        let activities = push_activities(vec![star, push_event("2", "7anish/shoply")]);
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].repo_name, "shoply");
    }

    #[test]
    fn test_duplicate_repos_are_deduped() {
        let activities = push_activities(vec![
            push_event("1", "7anish/portfolio"),
            push_event("2", "7anish/portfolio"),
            push_event("3", "7anish/shoply"),
        ]);
        assert_eq!(activities.len(), 2);
    }

    #[test]
    fn test_at_most_five_activities() {
        let events = (0..9)
            .map(|i| push_event(&i.to_string(), &format!("7anish/repo{i}")))
            .collect();
        assert_eq!(push_activities(events).len(), 5);
    }

    #[test]
    fn test_activity_shape() {
        let activities = push_activities(vec![push_event("42", "7anish/portfolio")]);
        let a = &activities[0];
        assert_eq!(a.repo_name, "portfolio");
        assert_eq!(a.repo_full_name, "7anish/portfolio");
        assert_eq!(a.repo_url, "https://github.com/7anish/portfolio");
        assert_eq!(a.activity_type, "Github");
    }
}
