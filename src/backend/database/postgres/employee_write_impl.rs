use async_trait::async_trait;
use sqlx::PgPool;

use super::super::employee_read::EmployeeRow;
use super::super::employee_write::{map_database_error, EmployeeWriter, PreparedEmployeeData};
use crate::backend::database::EMPLOYEES_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// PostgreSQL-specific implementation of EmployeeWriter
pub struct PostgresEmployeeWriter {
    pool: PgPool,
}

impl PostgresEmployeeWriter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeWriter for PostgresEmployeeWriter {
    async fn execute_employee_insert(&self, data: &PreparedEmployeeData) -> AppResult<Employee> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, email) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, email",
            EMPLOYEES_TABLE
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(e, &data.email))?;

        Ok(row.into())
    }

    async fn execute_employee_upsert(
        &self,
        id: i64,
        data: &PreparedEmployeeData,
    ) -> AppResult<Employee> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))?;

        let sql = format!(
            "INSERT INTO {} (id, first_name, last_name, email) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET \
                first_name = EXCLUDED.first_name, \
                last_name = EXCLUDED.last_name, \
                email = EXCLUDED.email \
             RETURNING id, first_name, last_name, email",
            EMPLOYEES_TABLE
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.email)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_database_error(e, &data.email))?;

        // An explicit id does not advance the BIGSERIAL sequence
        let sequence_sql = format!(
            "SELECT setval(pg_get_serial_sequence('{0}', 'id'), (SELECT MAX(id) FROM {0}))",
            EMPLOYEES_TABLE
        );

        sqlx::query(&sequence_sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Failed to advance id sequence: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit transaction: {}", e)))?;

        Ok(row.into())
    }

    async fn execute_employee_delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = $1", EMPLOYEES_TABLE);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete employee: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn execute_employee_delete_all(&self) -> AppResult<u64> {
        let sql = format!("DELETE FROM {}", EMPLOYEES_TABLE);

        let result = sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete employees: {}", e)))?;

        Ok(result.rows_affected())
    }
}
