// staff-client/examples/employee_demo.rs
// Resolve a route and load the data its view needs
//
// Usage: cargo run --example employee_demo -- [path]
//   e.g. cargo run --example employee_demo -- /edit-employee/3

use shared::{Route, Router};
use staff_client::{ClientConfig, EmployeeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    staff_client::logger::init_logger("info", false)?;

    let path = std::env::args().nth(1).unwrap_or_else(|| "/employees".to_string());
    let router = Router::with_base(std::env::var("STAFF_BASE_PATH").unwrap_or_default());
    let route = router.resolve(&path);

    let config = ClientConfig::from_env();
    let client = EmployeeClient::from_config(&config)?;

    tracing::info!(path = %path, view = ?route.view(), "Route resolved");

    match &route {
        Route::EmployeeList => {
            let resp = client.get_employees().await?;
            println!("{}", serde_json::to_string_pretty(&resp)?);
        }
        Route::EditEmployee { id: raw } => match route.employee_id() {
            Some(id) => match client.get_employee(id).await {
                Ok(resp) => println!("{}", serde_json::to_string_pretty(&resp)?),
                Err(e) => tracing::error!(id, "{}", e),
            },
            None => tracing::error!(id = %raw, "Employee not found"),
        },
        Route::AddEmployee => println!("Employee form: {:?}", route.form_mode()),
        Route::Home => println!("Home"),
        Route::NotFound { path } => println!("404: {path}"),
    }

    Ok(())
}
