//! Employee operations
//!
//! [`EmployeeApi`] is the capability set shared by the remote REST API
//! ([`RemoteEmployees`]) and the local snapshot ([`LocalEmployees`]).

mod local;
mod remote;

pub use local::{LocalEmployees, SNAPSHOT_KEY, messages};
pub use remote::RemoteEmployees;

use crate::ClientResult;
use async_trait::async_trait;
use shared::{ApiResponse, Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};

/// List, get, create, update and delete employee records
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list(&self) -> ClientResult<ApiResponse<Vec<Employee>>>;

    async fn get(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>>;

    async fn create(&self, data: &EmployeeCreate) -> ClientResult<ApiResponse<Employee>>;

    async fn update(
        &self,
        id: EmployeeId,
        data: &EmployeeUpdate,
    ) -> ClientResult<ApiResponse<Employee>>;

    /// Returns the removed record when the backend reports it
    async fn delete(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>>;
}
