use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use super::{SqliteEmployeeReader, SqliteEmployeeWriter};
use crate::backend::database::{UnifiedEmployeeReadOps, UnifiedEmployeeWriteOps};
use crate::backend::{Backend, EmployeeBackend};
use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// SQLite database backend implementation
///
/// Default zero-config store. `:memory:` databases are kept on a single,
/// never-recycled connection so the data lives as long as the backend.
pub struct SqliteBackend {
    pool: SqlitePool,
    read_ops: UnifiedEmployeeReadOps<SqliteEmployeeReader>,
    write_ops: UnifiedEmployeeWriteOps<SqliteEmployeeWriter>,
}

impl SqliteBackend {
    /// Create a new SQLite backend instance
    pub fn new(pool: SqlitePool) -> Self {
        let reader = SqliteEmployeeReader::new(pool.clone());
        let writer = SqliteEmployeeWriter::new(pool.clone());

        Self {
            pool,
            read_ops: UnifiedEmployeeReadOps::new(reader),
            write_ops: UnifiedEmployeeWriteOps::new(writer),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn connect_options(config: &DatabaseBackendConfig) -> AppResult<SqliteConnectOptions> {
        let mut options = SqliteConnectOptions::from_str(&config.connection_url)
            .map_err(|e| AppError::Configuration(format!("Invalid SQLite URL: {}", e)))?
            .create_if_missing(true);

        if let Some(mode) = config.get_option("journal_mode") {
            let mode = SqliteJournalMode::from_str(mode).map_err(|e| {
                AppError::Configuration(format!("Invalid journal_mode '{}': {}", mode, e))
            })?;
            options = options.journal_mode(mode);
        }

        Ok(options)
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        if config.is_memory_database() {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(Self::connect_options(config)?)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to SQLite: {}", e)))?;

        tracing::debug!("connected to SQLite at {}", config.connection_url);
        Ok(Self::new(pool))
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Health check failed: {}", e)))?;

        Ok(())
    }

    async fn init_schema(&self) -> AppResult<()> {
        super::schema::init_schema(&self.pool).await
    }

    async fn cleanup(&self) -> AppResult<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[async_trait]
impl EmployeeBackend for SqliteBackend {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        self.read_ops.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        self.read_ops.find_by_email(email).await
    }

    async fn find_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>> {
        self.read_ops.find_by_name_pair(first_name, last_name).await
    }

    async fn find_all_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Vec<Employee>> {
        self.read_ops
            .find_all_by_name_pair(first_name, last_name)
            .await
    }

    async fn save(&self, employee: &Employee) -> AppResult<Employee> {
        self.write_ops.save(employee).await
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.write_ops.delete_by_id(id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        self.read_ops.find_all().await
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.write_ops.delete_all().await
    }
}
