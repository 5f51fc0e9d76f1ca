//! Staff Client - employee data access with local fallback
//!
//! Talks to the employee REST API and serves every operation from a local
//! snapshot when the API is unreachable.
//!
//! ```no_run
//! use staff_client::{ClientConfig, EmployeeClient};
//!
//! # async fn example() -> Result<(), staff_client::ClientError> {
//! let client = EmployeeClient::from_config(&ClientConfig::from_env())?;
//! let employees = client.get_employees().await?;
//! println!("{}", employees.message);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod storage;

pub use api::{EmployeeApi, LocalEmployees, RemoteEmployees};
pub use client::EmployeeClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

// Re-export shared types for convenience
pub use shared::{ApiResponse, Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
