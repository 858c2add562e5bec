use thiserror::Error;

/// How a call to the remote service failed. Every boundary error collapses
/// into one of these three buckets; callers convert them into user-facing
/// notifications and never let them escape uncaught.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server (connect failure, timeout).
    #[error("network unavailable: {detail}")]
    NetworkUnavailable { detail: String },

    /// The server answered with a non-2xx status, or a 2xx body that does
    /// not satisfy the documented contract.
    #[error("server rejected the request (status {status}): {detail}")]
    ServerRejected { status: u16, detail: String },

    #[error("unexpected error: {detail}")]
    Unknown { detail: String },
}

impl ApiError {
    pub fn unknown(detail: impl Into<String>) -> Self {
        ApiError::Unknown {
            detail: detail.into(),
        }
    }
}
