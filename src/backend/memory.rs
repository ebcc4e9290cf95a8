//! In-memory employee store
//!
//! Keeps rows in a `BTreeMap` behind a mutex. The email uniqueness check and
//! the write happen under the same lock, mirroring the UNIQUE constraint of
//! the SQL backends.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::database::employee_write::EmployeeWriteProcessor;
use super::database::DatabaseBackendConfig;
use super::{Backend, EmployeeBackend};
use crate::error::{AppError, AppResult};
use crate::models::Employee;

#[derive(Debug)]
struct MemoryStore {
    next_id: i64,
    rows: BTreeMap<i64, Employee>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl MemoryStore {
    fn email_taken(&self, email: &str, except_id: Option<i64>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && row.id != except_id)
    }
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: Mutex<MemoryStore>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, MemoryStore>> {
        self.store
            .lock()
            .map_err(|e| AppError::Internal(format!("Memory store poisoned: {}", e)))
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    async fn connect(_config: &DatabaseBackendConfig) -> AppResult<Self> {
        Ok(Self::new())
    }

    async fn health_check(&self) -> AppResult<()> {
        self.lock().map(|_| ())
    }

    async fn init_schema(&self) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl EmployeeBackend for MemoryBackend {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Employee>> {
        Ok(self
            .lock()?
            .rows
            .values()
            .find(|row| row.email == email)
            .cloned())
    }

    async fn find_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Option<Employee>> {
        Ok(self
            .find_all_by_name_pair(first_name, last_name)
            .await?
            .into_iter()
            .next())
    }

    async fn find_all_by_name_pair(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<Vec<Employee>> {
        // BTreeMap iteration is already ordered by id
        Ok(self
            .lock()?
            .rows
            .values()
            .filter(|row| row.first_name == first_name && row.last_name == last_name)
            .cloned()
            .collect())
    }

    async fn save(&self, employee: &Employee) -> AppResult<Employee> {
        EmployeeWriteProcessor::prepare_employee_for_save(employee)?;
        let mut store = self.lock()?;

        if store.email_taken(&employee.email, employee.id) {
            return Err(AppError::DuplicateResource(employee.email.clone()));
        }

        let id = employee.id.unwrap_or(store.next_id);
        let following = id
            .checked_add(1)
            .ok_or_else(|| AppError::BadRequest(format!("Employee id {} is out of range", id)))?;
        store.next_id = store.next_id.max(following);

        let saved = employee.clone().with_id(id);
        store.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.lock()?.rows.clear();
        Ok(())
    }
}
