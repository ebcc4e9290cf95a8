//! Employee read operations
//!
//! This module provides common interfaces for employee read operations
//! that work across different database backends.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Employee;

/// Row shape shared by every SQL backend
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee {
            id: Some(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

/// Trait for employee read operations
#[async_trait]
pub trait EmployeeReader: Send + Sync {
    /// Find an employee by ID
    async fn find_employee_by_id(&self, id: i64) -> AppResult<Option<Employee>>;

    /// Find an employee by exact email
    async fn find_employee_by_email(&self, email: &str) -> AppResult<Option<Employee>>;

    /// Find employees by first and last name, ordered by ID
    async fn find_employees_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Vec<Employee>>;

    /// Find all employees
    async fn find_all_employees(&self) -> AppResult<Vec<Employee>>;
}

/// Unified employee read operations
///
/// Wraps a database-specific reader and adds the lookups that are derived
/// from the primitive queries.
pub struct UnifiedEmployeeReadOps<T: EmployeeReader> {
    reader: T,
}

impl<T: EmployeeReader> UnifiedEmployeeReadOps<T> {
    pub fn new(reader: T) -> Self {
        Self { reader }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        self.reader.find_employee_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        self.reader.find_employee_by_email(email).await
    }

    /// First match by ID when the name pair is not unique
    pub async fn find_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>> {
        let matches = self
            .reader
            .find_employees_by_name_pair(first_name, last_name)
            .await?;

        if matches.len() > 1 {
            tracing::debug!(
                "{} employees named {} {}, returning lowest id",
                matches.len(),
                first_name,
                last_name
            );
        }

        Ok(matches.into_iter().next())
    }

    pub async fn find_all_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Vec<Employee>> {
        self.reader
            .find_employees_by_name_pair(first_name, last_name)
            .await
    }

    pub async fn find_all(&self) -> AppResult<Vec<Employee>> {
        self.reader.find_all_employees().await
    }
}
