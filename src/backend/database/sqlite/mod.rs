//! SQLite-specific database implementations

pub mod backend_impl;
pub mod employee_read_impl;
pub mod employee_write_impl;
pub mod schema;

pub use backend_impl::SqliteBackend;
pub use employee_read_impl::SqliteEmployeeReader;
pub use employee_write_impl::SqliteEmployeeWriter;
