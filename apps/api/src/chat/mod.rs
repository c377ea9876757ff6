//! Chat Orchestrator — owns one conversational session per key, routes each
//! inbound message through the contact-capture short circuits, the language
//! model, and the tool dispatcher, and records every exchange.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::contact;
use crate::errors::AppError;
use crate::llm_client::{Content, LlmClient};
use crate::profile::Profile;
use crate::tools::{self, Tool, ToolError, ToolOutput};
use crate::tracker;

pub mod prompts;
pub mod sessions;

use sessions::SessionStore;

/// Literal marker the model emits when it wants a tool executed.
pub const TOOL_CALL_MARKER: &str = "TOOL_CALL:";
/// Pseudo-tool handled here, never dispatched.
pub const SAVE_CONTACT: &str = "SAVE_CONTACT";

/// Engagement threshold: once a conversation reaches this many exchanges the
/// assistant asks for contact details (at most once, and never after a
/// notification was filed).
pub const ASK_FOR_DETAILS_THRESHOLD: i32 = 5;

const SESSION_CAPACITY: usize = 1024;
const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

static TOOL_CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"TOOL_CALL:\s*(\w+)(?:\s*\[(.*?)\])?").expect("tool call regex is valid")
});

/// The outcome of one chat turn, serialized as the `data` object of the
/// `/api/chat` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub message: String,
    pub conv_key: String,
    pub message_count: i32,
    pub tool_used: bool,
    pub should_ask_for_details: bool,
    pub contact_saved: bool,
    pub needs_contact_info: bool,
}

/// The one orchestrator, consumed by both the HTTP server and the terminal
/// chat client.
pub struct ChatEngine {
    db: PgPool,
    llm: LlmClient,
    sessions: SessionStore,
    profile: Arc<Profile>,
    portfolio_name: String,
    system_prompt: String,
}

impl ChatEngine {
    pub fn new(db: PgPool, llm: LlmClient, profile: Arc<Profile>, portfolio_name: String) -> Self {
        let system_prompt = prompts::system_prompt(&portfolio_name);
        Self {
            db,
            llm,
            sessions: SessionStore::new(SESSION_CAPACITY, SESSION_TTL),
            profile,
            portfolio_name,
            system_prompt,
        }
    }

    pub fn portfolio_name(&self) -> &str {
        &self.portfolio_name
    }

    /// Drops the in-memory session for a key (used when a conversation is
    /// deleted). Persisted tracker state is handled separately.
    pub fn evict_session(&self, conv_key: &str) {
        self.sessions.remove(conv_key);
    }

    /// Runs one full turn for `(conv_key, user_text)` and returns the reply
    /// plus conversation bookkeeping.
    pub async fn handle_turn(&self, conv_key: &str, user_text: &str) -> Result<ChatTurn, AppError> {
        let conversation = tracker::get_conversation(&self.db, conv_key).await;

        // Engagement threshold: flip the asked-for-details flag once,
        // independent of how the rest of this turn goes.
        if conversation.as_ref().is_some_and(|c| {
            c.message_count >= ASK_FOR_DETAILS_THRESHOLD
                && !c.has_asked_for_details
                && !c.has_notified
        }) {
            tracker::mark_asked_for_details(&self.db, conv_key).await;
        }

        // Contact short circuit: only for known conversations that have not
        // yet produced a notification.
        if contact::has_contact_signal(user_text)
            && conversation.as_ref().is_some_and(|c| !c.has_notified)
        {
            let info = contact::extract_contact_info(user_text);
            if info.is_complete() {
                let reply =
                    tracker::notify(&self.db, &info, conv_key, &self.portfolio_name).await;
                info!("Captured contact for session {conv_key}");
                let updated =
                    tracker::track_exchange(&self.db, conv_key, user_text, &reply).await;
                return Ok(self.turn(reply, conv_key, updated.as_ref(), false, true, false));
            }

            let reply = prompts::provide_details_reply(&self.portfolio_name);
            let updated = tracker::track_exchange(&self.db, conv_key, user_text, &reply).await;
            return Ok(self.turn(reply, conv_key, updated.as_ref(), false, false, true));
        }

        // Model path: send through this session's cached history.
        let session = self.sessions.get_or_create(conv_key);
        let mut history = session.lock().await;

        history.push(Content::user(user_text));
        let reply = match self.llm.generate(&self.system_prompt, history.as_slice()).await {
            Ok(reply) => reply,
            Err(e) => {
                history.pop();
                return Err(AppError::Llm(e.to_string()));
            }
        };
        history.push(Content::model(reply.clone()));

        let mut final_reply = reply.clone();
        let mut tool_used = false;

        if reply.contains(TOOL_CALL_MARKER) {
            if let Some((function_name, raw_args)) = parse_tool_call(&reply) {
                if function_name == SAVE_CONTACT {
                    tracker::mark_asked_for_details(&self.db, conv_key).await;
                    final_reply = prompts::save_contact_reply(&self.portfolio_name);
                } else {
                    match self
                        .dispatch_tool(&mut history, &function_name, &raw_args)
                        .await?
                    {
                        Some(summary) => {
                            final_reply = summary;
                            tool_used = true;
                        }
                        None => {
                            final_reply = prompts::tool_failure_reply(&self.portfolio_name);
                        }
                    }
                }
            }
        }

        drop(history);

        let updated = tracker::track_exchange(&self.db, conv_key, user_text, &final_reply).await;
        Ok(self.turn(final_reply, conv_key, updated.as_ref(), tool_used, false, false))
    }

    /// Executes an allow-listed tool and asks the model to summarize its
    /// result. `None` means the fixed fallback reply should be used instead
    /// (unknown tool or value-level miss).
    async fn dispatch_tool(
        &self,
        history: &mut Vec<Content>,
        function_name: &str,
        raw_args: &str,
    ) -> Result<Option<String>, AppError> {
        let tool: Tool = match function_name.parse() {
            Ok(tool) => tool,
            Err(ToolError::Unknown(name)) => {
                warn!("Model requested unknown tool: {name}");
                return Ok(None);
            }
        };

        let args = tools::parse_args(raw_args);
        info!("Calling tool {tool} with {} argument(s)", args.len());

        let value = match tool.execute(&args, &self.profile) {
            ToolOutput::Data(value) => value,
            ToolOutput::Message(msg) => {
                warn!("Tool {tool} missed: {msg}");
                return Ok(None);
            }
        };

        let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
        let follow_up = prompts::follow_up_prompt(&self.portfolio_name, &pretty);

        history.push(Content::user(follow_up));
        let summary = match self.llm.generate(&self.system_prompt, history.as_slice()).await {
            Ok(summary) => summary,
            Err(e) => {
                history.pop();
                return Err(AppError::Llm(e.to_string()));
            }
        };
        history.push(Content::model(summary.clone()));

        Ok(Some(summary.trim().to_string()))
    }

    fn turn(
        &self,
        message: String,
        conv_key: &str,
        conversation: Option<&crate::models::ConversationRow>,
        tool_used: bool,
        contact_saved: bool,
        needs_contact_info: bool,
    ) -> ChatTurn {
        ChatTurn {
            message,
            conv_key: conv_key.to_string(),
            message_count: conversation.map(|c| c.message_count).unwrap_or(1),
            tool_used,
            should_ask_for_details: conversation.is_some_and(|c| {
                c.message_count >= ASK_FOR_DETAILS_THRESHOLD && !c.has_notified
            }),
            contact_saved,
            needs_contact_info,
        }
    }
}

/// Parses the first tool-call marker out of a model reply. Returns the
/// function name and the raw bracketed argument string (empty when the call
/// carries no arguments).
pub fn parse_tool_call(reply: &str) -> Option<(String, String)> {
    let caps = TOOL_CALL_RE.captures(reply)?;
    let name = caps.get(1)?.as_str().to_string();
    let args = caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string();
    Some((name, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_call_without_args() {
        let (name, args) = parse_tool_call("TOOL_CALL: getintroduction").unwrap();
        assert_eq!(name, "getintroduction");
        assert_eq!(args, "");
    }

    #[test]
    fn test_parse_tool_call_with_quoted_arg() {
        let (name, args) =
            parse_tool_call(r#"TOOL_CALL: getspecificproject ["Portfolio Website"]"#).unwrap();
        assert_eq!(name, "getspecificproject");
        assert_eq!(args, r#""Portfolio Website""#);
    }

    #[test]
    fn test_parse_tool_call_embedded_in_prose() {
        let reply = "Sure, let me look that up.\nTOOL_CALL: getskills\nOne moment.";
        let (name, args) = parse_tool_call(reply).unwrap();
        assert_eq!(name, "getskills");
        assert_eq!(args, "");
    }

    #[test]
    fn test_parse_tool_call_save_contact() {
        let (name, _) = parse_tool_call("TOOL_CALL: SAVE_CONTACT").unwrap();
        assert_eq!(name, SAVE_CONTACT);
    }

    #[test]
    fn test_parse_tool_call_absent() {
        assert!(parse_tool_call("Here are the skills you asked about.").is_none());
    }

    #[test]
    fn test_chat_turn_serializes_camel_case() {
        let turn = ChatTurn {
            message: "hi".to_string(),
            conv_key: "k".to_string(),
            message_count: 3,
            tool_used: true,
            should_ask_for_details: false,
            contact_saved: false,
            needs_contact_info: false,
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["convKey"], "k");
        assert_eq!(json["messageCount"], 3);
        assert_eq!(json["toolUsed"], true);
        assert!(json.get("shouldAskForDetails").is_some());
    }
}
