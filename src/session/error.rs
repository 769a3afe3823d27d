use thiserror::Error;

/// Errors surfaced through the query envelope
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// Append target does not exist
    #[error("Session not found")]
    SessionNotFound(String),

    /// No operation matches the request
    #[error("Query not supported")]
    UnsupportedOperation,

    /// Variables missing or of the wrong type
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl QueryError {
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::MalformedRequest(detail.to_string())
    }
}
