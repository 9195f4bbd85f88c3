use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backend answered with `success: false`; holds its message verbatim.
    #[error("{0}")]
    Rejected(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected response status: {0}")]
    Status(u16),

    #[error("Deserialization error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Whether the request failed before the backend could answer it.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            RepositoryError::ConnectionError(_) | RepositoryError::Timeout
        )
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::Timeout
        } else if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::Status(status.as_u16())
        } else {
            RepositoryError::ConnectionError(err.to_string())
        }
    }
}
