use crate::error::{AppError, AppResult};
use crate::models::Employee;
use async_trait::async_trait;
use std::sync::Arc;

pub mod database;
pub mod memory;

/// Supported storage backend types
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseType {
    PostgreSQL,
    SQLite,
    Memory,
}

impl std::str::FromStr for DatabaseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" | "postgres" => Ok(DatabaseType::PostgreSQL),
            "sqlite" => Ok(DatabaseType::SQLite),
            "memory" => Ok(DatabaseType::Memory),
            other => Err(AppError::Configuration(format!(
                "Unsupported database type: {}",
                other
            ))),
        }
    }
}

/// Core backend abstraction
///
/// Lifecycle operations every storage backend must provide, independent of
/// the records it holds.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Connect and initialize the storage backend
    async fn connect(config: &crate::backend::database::DatabaseBackendConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Check if the storage backend is healthy and accessible
    async fn health_check(&self) -> AppResult<()>;

    /// Create the employees table and its constraints if needed
    async fn init_schema(&self) -> AppResult<()>;

    /// Clean up resources when storage is no longer needed
    async fn cleanup(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Employee persistence port
///
/// Implementations must reject a second record with an email that is already
/// stored by returning [`AppError::DuplicateResource`], so the uniqueness
/// invariant holds even when two saves race past the service pre-check.
#[async_trait]
pub trait EmployeeBackend: Backend {
    /// Find an employee by id
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Find an employee by exact email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Find an employee by first and last name.
    ///
    /// Names are not unique. When several rows match, the one with the lowest
    /// id is returned; use [`EmployeeBackend::find_all_by_name_pair`] to see
    /// every match.
    async fn find_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>>;

    /// Find every employee with the given first and last name, ordered by id
    async fn find_all_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Vec<Employee>>;

    /// Insert when `id` is unset, otherwise overwrite the row with that id
    async fn save(&self, employee: &Employee) -> AppResult<Employee>;

    /// Delete by id; deleting a missing id is not an error
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Return every stored employee, in no particular order
    async fn find_all(&self) -> AppResult<Vec<Employee>>;

    /// Remove every employee. Maintenance operation used by test setup.
    async fn delete_all(&self) -> AppResult<()>;
}

/// Factory for creating backend instances
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend based on configuration
    pub async fn create(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Arc<dyn EmployeeBackend>> {
        let backend = Self::create_backend(config).await?;
        Ok(Arc::from(backend))
    }

    /// Create a backend based on configuration (returns Box)
    pub async fn create_backend(
        config: &crate::backend::database::DatabaseBackendConfig,
    ) -> AppResult<Box<dyn EmployeeBackend>> {
        match config.database_type {
            DatabaseType::PostgreSQL => {
                let backend =
                    crate::backend::database::postgres::PostgresBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::SQLite => {
                let backend =
                    crate::backend::database::sqlite::SqliteBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
            DatabaseType::Memory => {
                let backend = crate::backend::memory::MemoryBackend::connect(config).await?;
                Ok(Box::new(backend))
            }
        }
    }
}
