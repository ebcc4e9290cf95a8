use crate::backend::database::{EMAIL_CONSTRAINT, EMPLOYEES_TABLE};
use crate::error::{AppError, AppResult};
use sqlx::PgPool;

/// Initialize the employee schema for PostgreSQL
///
/// Creates the employees table with a BIGSERIAL id and the UNIQUE
/// constraint on email.
pub async fn init_schema(pool: &PgPool) -> AppResult<()> {
    let employees_sql = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
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
pub async fn drop_schema(pool: &PgPool) -> AppResult<()> {
    let sql = format!("DROP TABLE IF EXISTS {} CASCADE", EMPLOYEES_TABLE);
    sqlx::query(&sql)
        .execute(pool)
        .await
        .map_err(|e| AppError::Database(format!("Failed to drop table {}: {}", EMPLOYEES_TABLE, e)))?;

    Ok(())
}
