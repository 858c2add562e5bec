//! Chat session data model and the backend contract the controller talks to.

use crate::error::ApiError;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One turn of the conversation as it lives in the transcript.
/// Append-only; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub session_id: String,
    pub message: String,
    pub sender: Sender,
    pub created_at: String,
}

/// `created_at` as the chat backend may return it: either an RFC 3339
/// string or an epoch-milliseconds number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Millis(i64),
}

impl Timestamp {
    /// Canonical string form for the transcript. Millis outside chrono's
    /// representable range degrade to the raw number as text.
    pub fn normalize(&self) -> String {
        match self {
            Timestamp::Text(s) => s.clone(),
            Timestamp::Millis(ms) => Utc
                .timestamp_millis_opt(*ms)
                .single()
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| ms.to_string()),
        }
    }
}

/// Body of `POST /api/chat`. `None` fields stay off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A validated assistant turn from `POST /api/chat`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub session_id: String,
    pub message: String,
    pub sender: Sender,
    pub created_at: Timestamp,
}

/// Validated payload of `GET /api/chat/history/{session_id}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatHistory {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

/// The remote chat service, as seen by the controller. The HTTP client in
/// `infrastructure` implements this; tests substitute scripted doubles.
#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_message(&self, request: &ChatMessageRequest) -> Result<ChatReply, ApiError>;

    async fn fetch_history(&self, session_id: &str) -> Result<ChatHistory, ApiError>;
}
