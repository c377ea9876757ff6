//! LLM Client — the single point of entry for all Gemini API calls.
//!
//! ARCHITECTURAL RULE: no other module may call the Generative Language API
//! directly. All model interactions go through this module.
//!
//! There is deliberately no retry loop: a failed call is terminal for the
//! current turn and surfaces as a single error to the orchestrator.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all chat turns. Hardcoded to prevent drift.
pub const MODEL: &str = "gemini-2.5-flash-lite";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One turn of conversational history, in Gemini wire shape.
/// Role is "user" or "model".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: &'a [Content],
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<SystemPart<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text = content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<String>();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Thin wrapper over the Gemini `generateContent` endpoint. The session
/// history lives with the caller; every call sends the full transcript.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Sends the system instruction plus full history and returns the
    /// model's reply text.
    pub async fn generate(&self, system: &str, history: &[Content]) -> Result<String, LlmError> {
        let request_body = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![SystemPart { text: system }],
            },
            contents: history,
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_BASE}/{MODEL}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generate_response: GenerateResponse = response.json().await?;

        let text = generate_response.text().ok_or(LlmError::EmptyContent)?;
        debug!("LLM call succeeded: {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Hello "}, {"text": "there"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_content_constructors_set_roles() {
        assert_eq!(Content::user("hi").role, "user");
        assert_eq!(Content::model("hi").role, "model");
    }

    #[test]
    fn test_request_serializes_system_instruction() {
        let history = vec![Content::user("hi")];
        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![SystemPart { text: "be nice" }],
            },
            contents: &history,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["system_instruction"]["parts"][0]["text"], "be nice");
        assert_eq!(json["contents"][0]["role"], "user");
    }
}
