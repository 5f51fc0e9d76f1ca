//! Unified error system for Staff Desk
//!
//! - [`ErrorCode`]: standardized numeric error codes
//! - [`AppError`]: error type carrying a code and a message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::EmployeeNotFound);
//! assert_eq!(err.to_string(), "Employee not found");
//!
//! let err = AppError::with_message(ErrorCode::StorageError, "snapshot unreadable");
//! assert_eq!(err.code.code(), 9003);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::AppError;
