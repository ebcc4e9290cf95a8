use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::employee_read::{EmployeeReader, EmployeeRow};
use crate::backend::database::EMPLOYEES_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// SQLite-specific implementation of EmployeeReader
pub struct SqliteEmployeeReader {
    pool: SqlitePool,
}

impl SqliteEmployeeReader {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn select_sql(&self, condition: &str) -> String {
        format!(
            "SELECT id, first_name, last_name, email FROM {} {}",
            EMPLOYEES_TABLE, condition
        )
    }
}

#[async_trait]
impl EmployeeReader for SqliteEmployeeReader {
    async fn find_employee_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&self.select_sql("WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch employee: {}", e)))?;

        Ok(row.map(Employee::from))
    }

    async fn find_employee_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(&self.select_sql("WHERE email = ?1"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to fetch employee by email: {}", e))
            })?;

        Ok(row.map(Employee::from))
    }

    async fn find_employees_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            &self.select_sql("WHERE first_name = ?1 AND last_name = ?2 ORDER BY id"),
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to fetch employees by name: {}", e)))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_all_employees(&self) -> AppResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(&self.select_sql(""))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to fetch employees: {}", e)))?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }
}
