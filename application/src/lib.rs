pub mod auth_service;
pub mod chat_service;
pub mod matching;
pub mod matching_service;
