use crate::backend::database::{EMAIL_CONSTRAINT, EMPLOYEES_TABLE};
use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Initialize the employee schema for SQLite
///
/// Creates the employees table with the UNIQUE constraint on email that
/// backs the duplicate-email invariant at the storage level.
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    let employees_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL,
            CONSTRAINT {} UNIQUE (email)
        )
        "#,
        EMPLOYEES_TABLE, EMAIL_CONSTRAINT
    );

    sqlx::query(&employees_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create employees table: {}", e)))?;

    let index_sql = format!(
        "CREATE INDEX IF NOT EXISTS idx_{0}_name_pair ON {0} (first_name, last_name)",
        EMPLOYEES_TABLE
    );

    sqlx::query(&index_sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to create index: {}", e)))?;

    Ok(())
}

/// Drop the employee schema (for cleanup/testing)
pub async fn drop_schema(pool: &SqlitePool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {}", EMPLOYEES_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", EMPLOYEES_TABLE, e)))?;

    Ok(())
}
