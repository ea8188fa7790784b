//! Services building queries for the pages and dispatching them.

use thiserror::Error;

use crate::client::ClientError;

pub mod references;

/// Service-level failures surfaced to the hosting framework.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("query service timed out")]
    Timeout,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("query service unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ClientError> for ServiceError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(message) => ServiceError::NotFound(message),
            ClientError::Timeout => ServiceError::Timeout,
            ClientError::Rejected(message) => ServiceError::Validation(message),
            ClientError::Transport(message) => ServiceError::Unavailable(message),
            err @ (ClientError::Backend(_) | ClientError::Decode(_)) => {
                ServiceError::Internal(err.to_string())
            }
        }
    }
}
