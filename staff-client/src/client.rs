//! Employee client with local fallback
//!
//! Every operation first calls the remote API. If that fails for any reason
//! (network, non-2xx status, undecodable body) the failure is logged, an
//! artificial delay is taken, and the same operation is served from the
//! local snapshot instead. Only a missing record in the local snapshot is
//! surfaced as an error.

use crate::api::{EmployeeApi, LocalEmployees, RemoteEmployees};
use crate::config::{ClientConfig, DEFAULT_FALLBACK_DELAY, DEFAULT_LIST_FALLBACK_DELAY};
use crate::http::NetworkHttpClient;
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use shared::{ApiResponse, Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};
use std::time::Duration;

/// Remote-first employee client
#[derive(Debug)]
pub struct EmployeeClient<R = RemoteEmployees> {
    remote: R,
    local: LocalEmployees,
    list_delay: Duration,
    fallback_delay: Duration,
}

impl EmployeeClient {
    /// Build a client talking to the configured REST API
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(&config.base_url, config.timeout)?;
        let local = LocalEmployees::new(config.build_store());
        tracing::info!(
            base_url = %config.base_url,
            persisted = config.data_dir.is_some(),
            "Employee client ready"
        );
        Ok(EmployeeClient::new(RemoteEmployees::new(http), local)
            .with_delays(config.list_fallback_delay, config.fallback_delay))
    }
}

impl<R: EmployeeApi> EmployeeClient<R> {
    pub fn new(remote: R, local: LocalEmployees) -> Self {
        Self {
            remote,
            local,
            list_delay: DEFAULT_LIST_FALLBACK_DELAY,
            fallback_delay: DEFAULT_FALLBACK_DELAY,
        }
    }

    /// Set the fallback delays for list and for all other operations
    pub fn with_delays(mut self, list: Duration, other: Duration) -> Self {
        self.list_delay = list;
        self.fallback_delay = other;
        self
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    pub fn local(&self) -> &LocalEmployees {
        &self.local
    }

    /// List all employees.
    ///
    /// A successful remote answer also overwrites the local snapshot.
    pub async fn get_employees(&self) -> ClientResult<ApiResponse<Vec<Employee>>> {
        match self.remote.list().await {
            Ok(resp) => {
                if let Some(employees) = &resp.data {
                    self.local.replace_all(employees).await;
                }
                Ok(resp)
            }
            Err(e) => {
                self.fall_back("list", e, self.list_delay).await;
                self.local.list().await
            }
        }
    }

    pub async fn get_employee(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        match self.remote.get(id).await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                self.fall_back("get", e, self.fallback_delay).await;
                self.local.get(id).await
            }
        }
    }

    pub async fn create_employee(
        &self,
        data: &EmployeeCreate,
    ) -> ClientResult<ApiResponse<Employee>> {
        match self.remote.create(data).await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                self.fall_back("create", e, self.fallback_delay).await;
                self.local.create(data).await
            }
        }
    }

    pub async fn update_employee(
        &self,
        id: EmployeeId,
        data: &EmployeeUpdate,
    ) -> ClientResult<ApiResponse<Employee>> {
        match self.remote.update(id, data).await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                self.fall_back("update", e, self.fallback_delay).await;
                self.local.update(id, data).await
            }
        }
    }

    pub async fn delete_employee(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        match self.remote.delete(id).await {
            Ok(resp) => Ok(resp),
            Err(e) => {
                self.fall_back("delete", e, self.fallback_delay).await;
                self.local.delete(id).await
            }
        }
    }

    /// Overwrite the local snapshot with the seed set. Never touches the remote.
    pub async fn reset_mock_data(&self) -> ApiResponse<()> {
        self.local.reset().await
    }

    async fn fall_back(&self, operation: &'static str, error: ClientError, delay: Duration) {
        tracing::warn!(operation, error = %error, "API request failed, using local data");
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl<R: EmployeeApi> EmployeeApi for EmployeeClient<R> {
    async fn list(&self) -> ClientResult<ApiResponse<Vec<Employee>>> {
        self.get_employees().await
    }

    async fn get(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        self.get_employee(id).await
    }

    async fn create(&self, data: &EmployeeCreate) -> ClientResult<ApiResponse<Employee>> {
        self.create_employee(data).await
    }

    async fn update(
        &self,
        id: EmployeeId,
        data: &EmployeeUpdate,
    ) -> ClientResult<ApiResponse<Employee>> {
        self.update_employee(id, data).await
    }

    async fn delete(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        self.delete_employee(id).await
    }
}
