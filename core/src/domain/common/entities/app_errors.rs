use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid flower name: {0}")]
    InvalidInput(String),

    #[error("Upstream service error: {0}")]
    UpstreamServiceError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Only failures of the remote model are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoreError::UpstreamServiceError(_))
    }
}
