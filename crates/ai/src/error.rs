//! AI request error types.

use thiserror::Error;

/// Failure of a structured completion request.
///
/// Callers that render AI output are expected to recover from every variant
/// by showing an empty or default result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    /// The request never produced a response (network, HTTP status, quota).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with no text.
    #[error("Completion response was empty")]
    EmptyResponse,

    /// The response text was not valid JSON.
    #[error("Failed to parse completion response: {0}")]
    Parse(String),

    /// The JSON did not match the requested shape.
    #[error("Completion response does not match schema: {0}")]
    Schema(String),
}

impl RequestError {
    /// Create a new transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a new schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            RequestError::Transport(_) => "TRANSPORT_ERROR",
            RequestError::EmptyResponse => "EMPTY_RESPONSE",
            RequestError::Parse(_) => "PARSE_ERROR",
            RequestError::Schema(_) => "SCHEMA_ERROR",
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Parse(err.to_string())
    }
}
