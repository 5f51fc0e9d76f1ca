//! Client error types

use shared::error::{AppError, ErrorCode};
use shared::models::EmployeeId;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote answered with a non-2xx status
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No record with this id in the local snapshot
    #[error("Employee not found")]
    EmployeeNotFound(EmployeeId),

    /// The snapshot already holds the largest representable id
    #[error("No employee id left to assign")]
    IdExhausted,

    /// Key-value storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Http(_) | ClientError::Api { .. } => ErrorCode::RemoteUnavailable,
            ClientError::Serialization(_) => ErrorCode::InvalidFormat,
            ClientError::EmployeeNotFound(_) => ErrorCode::EmployeeNotFound,
            ClientError::IdExhausted => ErrorCode::EmployeeIdExhausted,
            ClientError::Storage(_) => ErrorCode::StorageError,
            ClientError::Config(_) => ErrorCode::InvalidRequest,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::EmployeeNotFound(_))
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::with_message(err.code(), err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
