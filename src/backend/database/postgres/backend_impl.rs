use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use super::super::config::DatabaseBackendConfig;
use super::{PostgresEmployeeReader, PostgresEmployeeWriter};
use crate::backend::database::{UnifiedEmployeeReadOps, UnifiedEmployeeWriteOps};
use crate::backend::{Backend, EmployeeBackend};
use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// PostgreSQL database backend implementation
pub struct PostgresBackend {
    pool: PgPool,
    read_ops: UnifiedEmployeeReadOps<PostgresEmployeeReader>,
    write_ops: UnifiedEmployeeWriteOps<PostgresEmployeeWriter>,
}

impl PostgresBackend {
    /// Create a new PostgreSQL backend instance
    pub fn new(pool: PgPool) -> Self {
        let reader = PostgresEmployeeReader::new(pool.clone());
        let writer = PostgresEmployeeWriter::new(pool.clone());

        Self {
            pool,
            read_ops: UnifiedEmployeeReadOps::new(reader),
            write_ops: UnifiedEmployeeWriteOps::new(writer),
        }
    }

    /// Get the connection pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Backend for PostgresBackend {
    async fn connect(config: &DatabaseBackendConfig) -> AppResult<Self> {
        // Validate configuration
        config
            .validate()
            .map_err(|e| AppError::Configuration(format!("Invalid backend config: {}", e)))?;

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(&config.connection_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

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
impl EmployeeBackend for PostgresBackend {
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
