//! Wire DTOs for the chat API.
//!
//! DESIGN
//! ======
//! Optional fields default so that older or trimmed server payloads still
//! decode. `SendResponse::success` defaults to `false` because the server's
//! error replies carry only `{"error": ...}`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single chat message as returned by the messages endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Server-side message id, when provided.
    #[serde(default)]
    pub id: Option<i64>,
    /// Author username.
    pub author: String,
    pub content: String,
    /// Display-ready timestamp (e.g. `"14:05"`).
    pub created_at: String,
    #[serde(default)]
    pub is_edited: bool,
}

/// Body of `GET /chat/api/messages/{team_id}/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST /chat/api/send/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendRequest {
    pub content: String,
    /// Omitted from the JSON body when the form carries no team id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

impl SendRequest {
    /// Build a request from raw form input. Returns `None` when the trimmed
    /// content is empty.
    pub fn from_input(raw: &str, team_id: Option<String>) -> Option<Self> {
        let content = raw.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self { content: content.to_owned(), team_id })
    }
}

/// Reply from the send endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SendResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Echo of the stored message on success.
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

impl SendResponse {
    /// Server-provided failure reason, or a placeholder when none was sent.
    pub fn failure_reason(&self) -> &str {
        self.error.as_deref().unwrap_or("unknown error")
    }
}
