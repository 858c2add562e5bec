pub mod auth_api;
pub mod chat_api;
pub mod config;
pub mod local_store;
pub mod matching_api;
pub mod seeker_directory;
