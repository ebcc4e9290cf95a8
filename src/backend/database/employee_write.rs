use async_trait::async_trait;
use sqlx::error::DatabaseError;

use super::{EMAIL_CONSTRAINT, EMPLOYEES_TABLE};

use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// Employee data checked and ready for a database write
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedEmployeeData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Database-specific adapter for employee write operations
#[async_trait]
pub trait EmployeeWriter: Send + Sync {
    /// Insert a new row and return it with the store-assigned id
    async fn execute_employee_insert(&self, data: &PreparedEmployeeData) -> AppResult<Employee>;

    /// Overwrite the row with `id`, inserting it under that id if missing
    async fn execute_employee_upsert(
        &self,
        id: i64,
        data: &PreparedEmployeeData,
    ) -> AppResult<Employee>;

    /// Delete one row, returning whether it existed
    async fn execute_employee_delete(&self, id: i64) -> AppResult<bool>;

    /// Delete every row, returning how many were removed
    async fn execute_employee_delete_all(&self) -> AppResult<u64>;
}

/// Shared logic for employee write operations
pub struct EmployeeWriteProcessor;

impl EmployeeWriteProcessor {
    /// Validate required fields and extract the column values
    ///
    /// Explicit ids must lie in `1..i64::MAX`; the top value is kept free so
    /// the id sequence of every store can still advance past the highest row.
    pub fn prepare_employee_for_save(employee: &Employee) -> AppResult<PreparedEmployeeData> {
        if let Some(id) = employee.id {
            if !(1..i64::MAX).contains(&id) {
                return Err(AppError::BadRequest(format!(
                    "Employee id {} is out of range",
                    id
                )));
            }
        }

        for (field, value) in [
            ("firstName", &employee.first_name),
            ("lastName", &employee.last_name),
            ("email", &employee.email),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }

        Ok(PreparedEmployeeData {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
        })
    }
}

/// Whether a unique violation was raised by the email constraint.
///
/// PostgreSQL reports the constraint name. SQLite does not, so its message
/// (`UNIQUE constraint failed: employees.email`) is matched instead.
fn violates_email_constraint(db_error: &dyn DatabaseError) -> bool {
    match db_error.constraint() {
        Some(name) => name == EMAIL_CONSTRAINT,
        None => db_error
            .message()
            .contains(&format!("{}.email", EMPLOYEES_TABLE)),
    }
}

/// Map sqlx errors from a write. Only the email UNIQUE constraint becomes
/// `DuplicateResource`; a primary key clash stays a database error.
pub fn map_database_error(error: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(ref db_error) = error {
        if db_error.is_unique_violation() && violates_email_constraint(&**db_error) {
            return AppError::DuplicateResource(email.to_string());
        }
    }
    AppError::Database(format!("Failed to save employee: {}", error))
}

/// Unified employee write operations using the adapter pattern
pub struct UnifiedEmployeeWriteOps<T: EmployeeWriter> {
    writer: T,
}

impl<T: EmployeeWriter> UnifiedEmployeeWriteOps<T> {
    pub fn new(writer: T) -> Self {
        Self { writer }
    }

    /// Insert when the employee has no id, otherwise overwrite by id
    pub async fn save(&self, employee: &Employee) -> AppResult<Employee> {
        let prepared = EmployeeWriteProcessor::prepare_employee_for_save(employee)?;

        match employee.id {
            Some(id) => self.writer.execute_employee_upsert(id, &prepared).await,
            None => self.writer.execute_employee_insert(&prepared).await,
        }
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let existed = self.writer.execute_employee_delete(id).await?;
        if !existed {
            tracing::debug!("delete of missing employee {} ignored", id);
        }
        Ok(())
    }

    pub async fn delete_all(&self) -> AppResult<()> {
        let removed = self.writer.execute_employee_delete_all().await?;
        tracing::debug!("removed {} employees", removed);
        Ok(())
    }
}
