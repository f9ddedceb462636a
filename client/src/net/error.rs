//! Failure taxonomy for user actions that talk to the backend.
//!
//! Every variant is terminal for the action that produced it: nothing is
//! retried, and the message is what the user sees.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NETWORK_MESSAGE: &str = "Could not connect to backend.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected server response";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Blocked locally; no request was issued.
    #[error("{0}")]
    Validation(String),
    /// Transport failure before a response arrived.
    #[error("Could not connect to backend.")]
    Network,
    /// Non-2xx answer; message comes from the payload's `error` field or a
    /// per-call fallback.
    #[error("{message}")]
    Backend { status: u16, message: String },
    /// Body was not JSON or did not have the expected shape.
    #[error("Unexpected server response")]
    UnexpectedResponse,
    /// Request body could not be serialised.
    #[error("Could not encode request.")]
    Encode,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Whether the backend answered 404.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Backend { status: 404, .. })
    }
}
