// staff-client/src/api/remote.rs
// Employee operations against the REST API

use super::EmployeeApi;
use crate::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ApiResponse, Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};

/// REST API backend
///
/// | Operation | Request |
/// |-----------|---------|
/// | list      | `GET /employees` |
/// | get       | `GET /employee/{id}` |
/// | create    | `POST /create` |
/// | update    | `PUT /update/{id}` |
/// | delete    | `DELETE /delete/{id}` |
///
/// Any 2xx JSON envelope is a success. Status and message are passed through
/// verbatim; `data` is kept when it reads as an employee record and dropped
/// otherwise.
#[derive(Debug, Clone)]
pub struct RemoteEmployees<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> RemoteEmployees<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}

/// Typed view of a remote envelope
fn typed<T: DeserializeOwned>(resp: ApiResponse<Value>) -> ApiResponse<T> {
    let data = resp.data.and_then(|v| match serde_json::from_value(v) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::debug!(error = %e, "Remote payload is not an employee record");
            None
        }
    });
    ApiResponse {
        status: resp.status,
        data,
        message: resp.message,
    }
}

#[async_trait]
impl<H: HttpClient> EmployeeApi for RemoteEmployees<H> {
    async fn list(&self) -> ClientResult<ApiResponse<Vec<Employee>>> {
        tracing::debug!("Fetching employees from API");
        let resp: ApiResponse<Value> = self.http.get("employees").await?;
        Ok(typed(resp))
    }

    async fn get(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        tracing::debug!(id, "Fetching employee from API");
        let resp: ApiResponse<Value> = self.http.get(&format!("employee/{id}")).await?;
        Ok(typed(resp))
    }

    async fn create(&self, data: &EmployeeCreate) -> ClientResult<ApiResponse<Employee>> {
        tracing::debug!(name = %data.employee_name, "Creating employee via API");
        let resp: ApiResponse<Value> = self.http.post("create", data).await?;
        Ok(typed(resp))
    }

    async fn update(
        &self,
        id: EmployeeId,
        data: &EmployeeUpdate,
    ) -> ClientResult<ApiResponse<Employee>> {
        tracing::debug!(id, "Updating employee via API");
        let mut resp: ApiResponse<Value> = self.http.put(&format!("update/{id}"), data).await?;
        // The API echoes the submitted fields without the id
        if let Some(Value::Object(fields)) = &mut resp.data {
            fields.entry("id").or_insert_with(|| Value::from(id));
        }
        Ok(typed(resp))
    }

    async fn delete(&self, id: EmployeeId) -> ClientResult<ApiResponse<Employee>> {
        tracing::debug!(id, "Deleting employee via API");
        // The API may answer with a bare id instead of the removed record
        let resp: ApiResponse<Value> = self.http.delete(&format!("delete/{id}")).await?;
        Ok(typed(resp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use shared::ResponseStatus;

    fn envelope(value: Value) -> ApiResponse<Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_typed_reads_short_field_names() {
        let resp: ApiResponse<Employee> = typed(envelope(json!({
            "status": "success",
            "data": { "name": "X", "salary": "1000", "age": "30", "id": 25 },
            "message": "Successfully! Record has been added."
        })));
        assert_eq!(resp.message, "Successfully! Record has been added.");
        let employee = resp.data.unwrap();
        assert_eq!(employee.id, 25);
        assert_eq!(employee.employee_salary, Decimal::from(1000));
    }

    #[test]
    fn test_typed_drops_foreign_data() {
        let resp: ApiResponse<Employee> = typed(envelope(json!({
            "status": "success",
            "data": "25",
            "message": "Successfully! Record has been deleted"
        })));
        assert_eq!(resp.status, ResponseStatus::Success);
        assert_eq!(resp.message, "Successfully! Record has been deleted");
        assert!(resp.data.is_none());

        let resp: ApiResponse<Vec<Employee>> = typed(envelope(json!({ "data": null })));
        assert!(resp.data.is_none());
    }
}
