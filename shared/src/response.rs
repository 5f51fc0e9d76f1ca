//! API Response envelope
//!
//! Every successful employee operation, remote or local, is wrapped in:
//! ```json
//! {
//!     "status": "success",
//!     "data": { ... },
//!     "message": "Created locally (API unavailable)"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Envelope status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    #[default]
    Success,
    Error,
    /// Any status string this client does not know about
    #[serde(other)]
    Unknown,
}

/// Unified response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: ResponseStatus,
    /// Response data (absent for data-less operations such as reset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            message: message.into(),
        }
    }

    /// Create a successful response without data
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: None,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Map the payload, keeping status and message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            data: self.data.map(f),
            message: self.message,
        }
    }

    /// Take the payload, if any
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
