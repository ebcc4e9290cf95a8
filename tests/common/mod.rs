#![allow(dead_code)]

use axum::Router;
use employee_server::backend::database::DatabaseBackendConfig;
use employee_server::backend::{BackendFactory, EmployeeBackend};
use employee_server::config::AppConfig;
use employee_server::startup::build_router;
use employee_server::{Employee, EmployeeService};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

const FIRST_NAMES: &[&str] = &["Tom", "Tim", "Ada", "Grace", "Linus", "Barbara", "Ken", "Margaret"];
const LAST_NAMES: &[&str] = &["lin", "lang", "Lovelace", "Hopper", "Torvalds", "Liskov", "Thompson"];

static EMAIL_SEQ: AtomicU64 = AtomicU64::new(1);

/// Base URL of the employee collection
pub const SERVICE_URL: &str = "/api/employees/";

pub fn employee_url(id: i64) -> String {
    format!("{}{}/", SERVICE_URL, id)
}

/// Random employee with an email no other fixture will produce
pub fn new_employee() -> Employee {
    let mut rng = rand::thread_rng();
    let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Tom");
    let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("lin");
    let seq = EMAIL_SEQ.fetch_add(1, Ordering::Relaxed);
    let salt: u32 = rng.gen_range(1000..10000);

    Employee::new(
        first,
        last,
        format!(
            "{}.{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            seq,
            salt
        ),
    )
}

pub fn new_employees(count: usize) -> Vec<Employee> {
    (0..count).map(|_| new_employee()).collect()
}

pub fn employee_json(employee: &Employee) -> Value {
    json!({
        "firstName": employee.first_name,
        "lastName": employee.last_name,
        "email": employee.email
    })
}

/// Create backend for testing with in-memory SQLite database
pub async fn setup_test_backend() -> Result<Arc<dyn EmployeeBackend>, Box<dyn std::error::Error>>
{
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory_sqlite()).await?;
    backend.init_schema().await?;
    Ok(backend)
}

/// Create the non-SQL in-memory backend
pub async fn setup_memory_backend() -> Result<Arc<dyn EmployeeBackend>, Box<dyn std::error::Error>>
{
    let backend = BackendFactory::create(&DatabaseBackendConfig::memory()).await?;
    backend.init_schema().await?;
    Ok(backend)
}

/// Every backend that runs without external services
pub async fn local_backends() -> Vec<(&'static str, Arc<dyn EmployeeBackend>)> {
    vec![
        ("sqlite", setup_test_backend().await.unwrap()),
        ("memory", setup_memory_backend().await.unwrap()),
    ]
}

/// Test app over in-memory SQLite, returning the backend for direct seeding
pub async fn setup_test_app(
) -> Result<(Router, Arc<dyn EmployeeBackend>), Box<dyn std::error::Error>> {
    let backend = setup_test_backend().await?;
    let service = Arc::new(EmployeeService::new(backend.clone()));
    Ok((build_router(service), backend))
}

pub fn create_test_app_config() -> AppConfig {
    AppConfig::default_config()
}
