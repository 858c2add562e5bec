//! The chat session controller.
//!
//! Owns the transcript, the persisted session identifier, and the
//! request/response cycle with the chat backend. Session states move
//! `NoSession -> SessionPending -> SessionActive`, and back to `NoSession`
//! only on an explicit reset.

use chrono::Utc;
use domain::error::ApiError;
use domain::session::{ChatBackend, ChatMessage, ChatMessageRequest, Sender};
use domain::store::{KeyValueStore, CHAT_SESSION_KEY};
use shared::types::Result;
use std::sync::Arc;

/// What a `send_message` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    /// The message went out and both turns were appended.
    Delivered,
    /// Empty input or a send already in flight; nothing happened.
    Ignored,
}

pub struct ChatService {
    backend: Arc<dyn ChatBackend>,
    store: Arc<dyn KeyValueStore>,
    session_id: Option<String>,
    transcript: Vec<ChatMessage>,
    in_flight: bool,
    connection_problem: Option<ApiError>,
}

impl ChatService {
    pub fn new(backend: Arc<dyn ChatBackend>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            store,
            session_id: None,
            transcript: Vec::new(),
            in_flight: false,
            connection_problem: None,
        }
    }

    /// Pick up a previously persisted session, if any, and pull its history.
    /// A history failure degrades to an empty transcript plus a retryable
    /// connection-problem state; it is never fatal.
    pub async fn restore(&mut self) {
        let stored = self.store.get(CHAT_SESSION_KEY).ok().flatten();
        let Some(session_id) = stored else {
            return;
        };
        self.session_id = Some(session_id.clone());

        match self.backend.fetch_history(&session_id).await {
            Ok(history) => {
                self.transcript = history.messages;
                self.connection_problem = None;
            }
            Err(err) => {
                tracing::warn!(%err, "history fetch failed, starting with an empty transcript");
                self.transcript.clear();
                self.connection_problem = Some(err);
            }
        }
    }

    /// Manual retry for a failed history fetch.
    pub async fn retry_history(&mut self) {
        self.restore().await;
    }

    /// Send one user message. Input is trimmed first; empty input or a send
    /// already in flight is ignored outright (no call, no transcript change).
    ///
    /// On success the locally synthesized user turn is appended, immediately
    /// followed by the assistant turn with its timestamp normalized. On
    /// failure the transcript is left exactly as it was; the user bubble only
    /// appears once the send is known to have succeeded.
    pub async fn send_message(&mut self, input: &str) -> std::result::Result<SendStatus, ApiError> {
        let text = input.trim().to_string();
        if text.is_empty() || self.in_flight {
            return Ok(SendStatus::Ignored);
        }

        self.in_flight = true;
        let request = ChatMessageRequest {
            session_id: self.session_id.clone(),
            message: text.clone(),
            user_id: None,
        };
        let result = self.backend.send_message(&request).await;
        self.in_flight = false;

        let reply = result?;
        let session_id = reply.session_id;
        let adopted = self.session_id.is_none();
        if adopted {
            self.session_id = Some(session_id.clone());
        }

        self.transcript.push(ChatMessage {
            session_id: session_id.clone(),
            message: text,
            sender: Sender::User,
            created_at: Utc::now().to_rfc3339(),
        });
        self.transcript.push(ChatMessage {
            session_id: session_id.clone(),
            message: reply.message,
            sender: reply.sender,
            created_at: reply.created_at.normalize(),
        });

        if adopted {
            // The exchange already succeeded; only persistence can fail here.
            self.store
                .set(CHAT_SESSION_KEY, &session_id)
                .map_err(|e| ApiError::unknown(format!("failed to persist session id: {e}")))?;
        }

        Ok(SendStatus::Delivered)
    }

    /// Drop the persisted session id, the in-memory id, and the transcript.
    /// No remote call is made.
    pub fn new_session(&mut self) -> Result<()> {
        self.store.remove(CHAT_SESSION_KEY)?;
        self.session_id = None;
        self.transcript.clear();
        Ok(())
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight
    }

    pub fn connection_problem(&self) -> Option<&ApiError> {
        self.connection_problem.as_ref()
    }
}
