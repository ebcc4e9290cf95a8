//! Database abstraction layer for the employee store
//!
//! This module provides a unified interface for database operations across
//! different database backends (PostgreSQL, SQLite) while maintaining
//! database-specific SQL where needed.
//!
//! # Architecture
//!
//! ```text
//! Common Logic (employee_read.rs, employee_write.rs)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (PostgreSQL-specific code)
//!     └── sqlite/   (SQLite-specific code)
//! ```

pub mod config;
pub mod employee_read;
pub mod employee_write;
pub mod postgres;
pub mod sqlite;

/// Name of the single table holding employee rows
pub const EMPLOYEES_TABLE: &str = "employees";

/// Name of the UNIQUE constraint on `employees.email`
pub const EMAIL_CONSTRAINT: &str = "employees_email_key";

pub use config::DatabaseBackendConfig;

pub use employee_read::{EmployeeReader, EmployeeRow, UnifiedEmployeeReadOps};

pub use employee_write::{EmployeeWriter, UnifiedEmployeeWriteOps};

pub use postgres::{PostgresBackend, PostgresEmployeeReader, PostgresEmployeeWriter};
pub use sqlite::{SqliteBackend, SqliteEmployeeReader, SqliteEmployeeWriter};
