// staff-client/src/api/local.rs
// Employee operations against the local snapshot

use super::EmployeeApi;
use crate::storage::KeyValueStore;
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use shared::models::seed_employees;
use shared::{ApiResponse, Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Storage key holding the serialized employee array
pub const SNAPSHOT_KEY: &str = "employees";

/// Envelope messages for locally served operations
pub mod messages {
    pub const LIST: &str = "Using mock data due to API limitations";
    pub const GET: &str = "Using mock data (API unavailable)";
    pub const CREATE: &str = "Created locally (API unavailable)";
    pub const UPDATE: &str = "Updated locally (API unavailable)";
    pub const DELETE: &str = "Deleted locally (API unavailable)";
    pub const RESET: &str = "Mock data reset to defaults";
}

/// Local employee store
///
/// The snapshot is re-read from the key-value store on every operation and
/// written back after every mutation. A missing or unreadable snapshot is
/// replaced by the seed set. Write failures are logged and do not fail the
/// operation.
#[derive(Debug)]
pub struct LocalEmployees {
    store: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write cycles on the snapshot
    lock: Mutex<()>,
}

impl LocalEmployees {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Current snapshot (seeding it if absent)
    pub async fn snapshot(&self) -> Vec<Employee> {
        let _guard = self.lock.lock().await;
        self.load()
    }

    /// Overwrite the snapshot with the given records
    pub async fn replace_all(&self, employees: &[Employee]) {
        let _guard = self.lock.lock().await;
        self.persist(employees);
    }

    /// Overwrite the snapshot with the seed set
    pub async fn reset(&self) -> ApiResponse<()> {
        let _guard = self.lock.lock().await;
        self.persist(&seed_employees());
        tracing::info!("Local snapshot reset to seed data");
        ApiResponse::success_empty(messages::RESET)
    }

    fn load(&self) -> Vec<Employee> {
        let raw = match self.store.get(SNAPSHOT_KEY) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read local snapshot, using seed data");
                return seed_employees();
            }
        };

        match raw.map(|json| serde_json::from_str::<Vec<Employee>>(&json)) {
            Some(Ok(employees)) => employees,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Local snapshot is corrupt, reseeding");
                let seed = seed_employees();
                self.persist(&seed);
                seed
            }
            None => {
                tracing::debug!("No local snapshot yet, seeding");
                let seed = seed_employees();
                self.persist(&seed);
                seed
            }
        }
    }

    fn persist(&self, employees: &[Employee]) {
        let result = serde_json::to_string(employees)
            .map_err(ClientError::from)
            .and_then(|json| self.store.set(SNAPSHOT_KEY, &json));
        match result {
            Ok(()) => tracing::debug!(count = employees.len(), "Local snapshot saved"),
            Err(e) => tracing::warn!(error = %e, "Failed to save local snapshot"),
        }
    }
}

#[async_trait]
impl EmployeeApi for LocalEmployees {
    async fn list(&self) -> ClientResult<ApiResponse<Vec<Employee>>> {
        Ok(ApiResponse::success(self.snapshot().await, messages::LIST))
    }

    async fn get(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        let _guard = self.lock.lock().await;
        self.load()
            .into_iter()
            .find(|e| e.id == id)
            .map(|e| ApiResponse::success(e, messages::GET))
            .ok_or(ClientError::EmployeeNotFound(id))
    }

    async fn create(&self, data: &EmployeeCreate) -> ClientResult<ApiResponse<Employee>> {
        let _guard = self.lock.lock().await;
        let mut employees = self.load();
        let id = employees
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(ClientError::IdExhausted)?;
        let employee = data.clone().into_employee(id);
        employees.push(employee.clone());
        self.persist(&employees);
        Ok(ApiResponse::success(employee, messages::CREATE))
    }

    async fn update(
        &self,
        id: EmployeeId,
        data: &EmployeeUpdate,
    ) -> ClientResult<ApiResponse<Employee>> {
        let _guard = self.lock.lock().await;
        let mut employees = self.load();
        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ClientError::EmployeeNotFound(id))?;
        employee.apply(data);
        let updated = employee.clone();
        self.persist(&employees);
        Ok(ApiResponse::success(updated, messages::UPDATE))
    }

    async fn delete(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        let _guard = self.lock.lock().await;
        let mut employees = self.load();
        let index = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or(ClientError::EmployeeNotFound(id))?;
        let removed = employees.remove(index);
        self.persist(&employees);
        Ok(ApiResponse::success(removed, messages::DELETE))
    }
}
