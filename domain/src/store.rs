//! Client-local key-value persistence.
//!
//! The controllers take this as an injected collaborator instead of reaching
//! for ambient global state, so tests can substitute an in-memory fake.
//! Values are opaque strings with no schema versioning or migration path.

use shared::types::Result;

/// Key under which the chat session identifier is persisted.
pub const CHAT_SESSION_KEY: &str = "chat_session_id";
/// Key under which the auth access token is persisted.
pub const AUTH_TOKEN_KEY: &str = "token";
/// Key flagging a completed login.
pub const LOGIN_FLAG_KEY: &str = "isLoggedIn";
/// Key holding the logged-in user's info as a JSON blob.
pub const USER_INFO_KEY: &str = "userInfo";
/// Key remembering the seeker picked for the last matching run.
pub const SELECTED_SEEKER_KEY: &str = "selectedJobSeekerId";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}
