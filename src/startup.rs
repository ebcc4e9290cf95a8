use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tracing::info;

use crate::backend::{BackendFactory, EmployeeBackend};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::logging::logging_middleware;
use crate::resource::employee::{self, EMPLOYEES_PATH};
use crate::service::EmployeeService;

/// Create the configured backend, check it is reachable and create its schema
pub async fn setup_backend(config: &AppConfig) -> AppResult<Arc<dyn EmployeeBackend>> {
    let backend_config = config.to_backend_config()?;

    info!(
        "Setting up {:?} backend ({})",
        backend_config.database_type, backend_config.connection_url
    );

    let backend = BackendFactory::create(&backend_config).await?;
    backend.health_check().await?;
    backend.init_schema().await?;

    info!("Initialized employee schema");
    Ok(backend)
}

/// Build the HTTP router for the employee API.
///
/// Every route is reachable with and without a trailing slash.
pub fn build_router(service: Arc<EmployeeService>) -> Router {
    let collection = get(employee::list_employees).post(employee::create_employee);
    let item = get(employee::get_employee)
        .put(employee::update_employee)
        .delete(employee::delete_employee);

    Router::new()
        .route(EMPLOYEES_PATH, collection.clone())
        .route(&format!("{}/", EMPLOYEES_PATH), collection)
        .route(&format!("{}/{{id}}", EMPLOYEES_PATH), item.clone())
        .route(&format!("{}/{{id}}/", EMPLOYEES_PATH), item)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(service)
}

/// Backend, service and router in one step
pub async fn build_app(config: &AppConfig) -> AppResult<Router> {
    let backend = setup_backend(config).await?;
    let service = Arc::new(EmployeeService::new(backend));
    Ok(build_router(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_build_app_from_default_config() {
        let app = build_app(&AppConfig::default_config()).await.unwrap();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/employees/").await;
        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Vec<serde_json::Value>>().len(), 0);

        server.get("/api/employees").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_setup_backend_rejects_bad_database_type() {
        let mut config = AppConfig::default_config();
        if let Some(db) = config.backend.database.as_mut() {
            db.db_type = "mysql".to_string();
        }

        assert!(setup_backend(&config).await.is_err());
    }
}
