use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Missing or malformed input the caller can correct.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to decode image: {0}")]
    Decode(String),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    /// The oracle (or the relay, seen from the client) failed or answered
    /// with a non-success status.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::InvalidInput(_))
    }
}
