//! Conversation round-trips through the real HTTP client against a mock
//! server.

use application::chat_service::{ChatService, SendStatus};
use domain::session::Sender;
use domain::store::{KeyValueStore, CHAT_SESSION_KEY};
use infrastructure::chat_api::ChatApiClient;
use infrastructure::local_store::MemoryStore;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn a_full_conversation_round_trip() {
    let server = MockServer::start().await;

    // First exchange: no session id on the wire yet.
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"message": "最初の質問"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "s-100",
            "message": "最初の回答",
            "sender": "assistant",
            "created_at": "2025-08-01T09:00:00+09:00"
        })))
        .mount(&server)
        .await;

    // Second exchange carries the adopted id; the server answers with an
    // epoch-milliseconds timestamp this time.
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({"session_id": "s-100", "message": "次の質問"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "s-100",
            "message": "次の回答",
            "sender": "assistant",
            "created_at": 1754006400000i64
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let mut chat = ChatService::new(Arc::new(ChatApiClient::new(server.uri())), store.clone());

    let status = chat.send_message("  最初の質問  ").await.unwrap();
    assert_eq!(status, SendStatus::Delivered);
    assert_eq!(chat.session_id(), Some("s-100"));
    assert_eq!(
        store.get(CHAT_SESSION_KEY).unwrap(),
        Some("s-100".to_string())
    );

    chat.send_message("次の質問").await.unwrap();

    let transcript = chat.transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript[0].sender, Sender::User);
    assert_eq!(transcript[0].message, "最初の質問");
    assert_eq!(transcript[1].sender, Sender::Assistant);
    assert_eq!(transcript[2].message, "次の質問");
    assert_eq!(transcript[3].created_at, "2025-08-01T00:00:00+00:00");
}

#[tokio::test]
async fn a_later_run_restores_the_session_and_history() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/chat/history/s-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "s-7",
            "messages": [
                {
                    "session_id": "s-7",
                    "message": "前回の質問",
                    "sender": "user",
                    "created_at": "2025-08-01T00:00:00Z"
                },
                {
                    "session_id": "s-7",
                    "message": "前回の回答",
                    "sender": "assistant",
                    "created_at": "2025-08-01T00:00:05Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    store.set(CHAT_SESSION_KEY, "s-7").unwrap();

    let mut chat = ChatService::new(Arc::new(ChatApiClient::new(server.uri())), store.clone());
    chat.restore().await;

    assert_eq!(chat.session_id(), Some("s-7"));
    assert_eq!(chat.transcript().len(), 2);
    assert!(chat.connection_problem().is_none());

    chat.new_session().unwrap();
    assert!(chat.transcript().is_empty());
    assert_eq!(store.get(CHAT_SESSION_KEY).unwrap(), None);
}

#[tokio::test]
async fn a_rejected_send_keeps_the_transcript_intact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let mut chat = ChatService::new(Arc::new(ChatApiClient::new(server.uri())), store.clone());

    let err = chat.send_message("届かない質問").await.unwrap_err();
    assert_eq!(
        err,
        domain::error::ApiError::ServerRejected {
            status: 500,
            detail: "internal error".to_string()
        }
    );
    assert!(chat.transcript().is_empty());
    assert_eq!(store.get(CHAT_SESSION_KEY).unwrap(), None);
}
