//! Use-case services sitting between the HTTP handlers and the backends.

pub mod employee_service;

pub use employee_service::EmployeeService;
