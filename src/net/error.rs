//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every form/page catches at its submit boundary and renders one
//! displayable message: the backend-provided message verbatim when the
//! server answered, a caller-chosen fallback otherwise. Nothing in this
//! module panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure modes of an outbound API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The call was made outside the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// True for an authorization failure the session pipeline handles.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// One user-facing line: the backend message for status errors,
    /// `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Extract the backend's `message` field from an error body, falling back
/// to a status-coded line when the body carries none.
pub fn error_message(body: &str, status: u16) -> String {
    serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}
