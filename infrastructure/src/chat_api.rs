//! HTTP client for the remote chat service.
//!
//! Responses are decoded into raw structs with optional fields and then
//! validated into the domain contract; a 2xx body missing a required field
//! is treated as a rejection, not trusted implicitly.

use domain::error::ApiError;
use domain::session::{
    ChatBackend, ChatHistory, ChatMessage, ChatMessageRequest, ChatReply, Sender, Timestamp,
};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct RawChatReply {
    session_id: Option<String>,
    message: Option<String>,
    sender: Option<Sender>,
    created_at: Option<Timestamp>,
}

#[derive(Deserialize)]
struct RawHistoryMessage {
    session_id: Option<String>,
    message: Option<String>,
    sender: Option<Sender>,
    created_at: Option<Timestamp>,
}

#[derive(Deserialize)]
struct RawHistory {
    session_id: Option<String>,
    messages: Option<Vec<RawHistoryMessage>>,
}

#[derive(Clone)]
pub struct ChatApiClient {
    client: Arc<Client>,
    base_url: String,
}

impl ChatApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
        }
    }
}

/// Transport-level failures (the request never completed) map to
/// `NetworkUnavailable`; everything else reqwest reports is `Unknown`.
pub(crate) fn transport_error(err: reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() {
        ApiError::NetworkUnavailable {
            detail: err.to_string(),
        }
    } else {
        ApiError::Unknown {
            detail: err.to_string(),
        }
    }
}

pub(crate) fn require<T>(field: Option<T>, name: &str, status: u16) -> Result<T, ApiError> {
    field.ok_or_else(|| ApiError::ServerRejected {
        status,
        detail: format!("response missing required field `{name}`"),
    })
}

pub(crate) async fn read_body(response: reqwest::Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(ApiError::ServerRejected {
            status: status.as_u16(),
            detail: text,
        });
    }
    Ok((status.as_u16(), text))
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::ServerRejected {
        status,
        detail: format!("malformed response body: {e}"),
    })
}

#[async_trait::async_trait]
impl ChatBackend for ChatApiClient {
    async fn send_message(&self, request: &ChatMessageRequest) -> Result<ChatReply, ApiError> {
        let url = format!("{}/api/chat", self.base_url);
        tracing::debug!(%url, "sending chat message");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_body(response).await?;
        let raw: RawChatReply = decode(status, &body)?;

        Ok(ChatReply {
            session_id: require(raw.session_id, "session_id", status)?,
            message: require(raw.message, "message", status)?,
            sender: require(raw.sender, "sender", status)?,
            created_at: require(raw.created_at, "created_at", status)?,
        })
    }

    async fn fetch_history(&self, session_id: &str) -> Result<ChatHistory, ApiError> {
        let url = format!("{}/api/chat/history/{}", self.base_url, session_id);
        tracing::debug!(%url, "fetching chat history");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = read_body(response).await?;
        let raw: RawHistory = decode(status, &body)?;

        let mut messages = Vec::new();
        for entry in require(raw.messages, "messages", status)? {
            messages.push(ChatMessage {
                session_id: require(entry.session_id, "messages[].session_id", status)?,
                message: require(entry.message, "messages[].message", status)?,
                sender: require(entry.sender, "messages[].sender", status)?,
                created_at: require(entry.created_at, "messages[].created_at", status)?.normalize(),
            });
        }

        Ok(ChatHistory {
            session_id: require(raw.session_id, "session_id", status)?,
            messages,
        })
    }
}
