//! Employee use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points used by the HTTP handlers.
//! - Enforce email uniqueness before delegating a create to the backend.
//!
//! # Invariants
//! - "Not found" is always `None`, never an error.
//! - `update_employee` and `delete_employee` do not check existence; the
//!   caller looks the record up first when it cares.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::backend::EmployeeBackend;
use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// Service wrapper over an employee backend.
#[derive(Clone)]
pub struct EmployeeService {
    backend: Arc<dyn EmployeeBackend>,
}

impl EmployeeService {
    /// Creates a service using the provided backend.
    pub fn new(backend: Arc<dyn EmployeeBackend>) -> Self {
        Self { backend }
    }

    /// Access the underlying backend, e.g. for maintenance calls.
    pub fn backend(&self) -> &Arc<dyn EmployeeBackend> {
        &self.backend
    }

    /// Creates a new employee.
    ///
    /// Fails with [`AppError::DuplicateResource`] when the email is already
    /// taken. The backend repeats the check atomically, so a concurrent
    /// create that slips past this lookup fails the same way.
    pub async fn save(&self, employee: &Employee) -> AppResult<Employee> {
        if self.backend.find_by_email(&employee.email).await?.is_some() {
            warn!("rejected duplicate employee email {}", employee.email);
            return Err(AppError::DuplicateResource(employee.email.clone()));
        }

        let saved = self.backend.save(employee).await?;
        info!("created employee {:?}", saved.id);
        Ok(saved)
    }

    /// Returns every employee. Order is whatever the store yields.
    pub async fn get_all_employees(&self) -> AppResult<Vec<Employee>> {
        self.backend.find_all().await
    }

    pub async fn get_employee_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        self.backend.find_by_id(id).await
    }

    /// Overwrites the record identified by `employee.id`.
    pub async fn update_employee(&self, employee: &Employee) -> AppResult<Employee> {
        let saved = self.backend.save(employee).await?;
        debug!("updated employee {:?}", saved.id);
        Ok(saved)
    }

    /// Deletes by id. Succeeds whether or not the record existed.
    pub async fn delete_employee(&self, id: i64) -> AppResult<()> {
        self.backend.delete_by_id(id).await?;
        debug!("deleted employee {}", id);
        Ok(())
    }
}
