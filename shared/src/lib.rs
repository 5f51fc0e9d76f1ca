//! Shared types for Staff Desk
//!
//! Data model, response envelope, error codes and the route table used by
//! the employee client and any view layer built on top of it.

pub mod error;
pub mod models;
pub mod response;
pub mod route;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCode};
pub use models::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
pub use response::{ApiResponse, ResponseStatus};
pub use route::{FormMode, Route, RouteName, Router, View};
