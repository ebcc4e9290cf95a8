use async_trait::async_trait;
use sqlx::SqlitePool;

use super::super::employee_read::EmployeeRow;
use super::super::employee_write::{map_database_error, EmployeeWriter, PreparedEmployeeData};
use crate::backend::database::EMPLOYEES_TABLE;
use crate::error::{AppError, AppResult};
use crate::models::Employee;

/// SQLite-specific implementation of EmployeeWriter
///
/// Relies on `RETURNING` so inserts hand back the row with its assigned id
/// without a second query.
pub struct SqliteEmployeeWriter {
    pool: SqlitePool,
}

impl SqliteEmployeeWriter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeWriter for SqliteEmployeeWriter {
    async fn execute_employee_insert(&self, data: &PreparedEmployeeData) -> AppResult<Employee> {
        let sql = format!(
            "INSERT INTO {} (first_name, last_name, email) VALUES (?1, ?2, ?3) \
             RETURNING id, first_name, last_name, email",
            EMPLOYEES_TABLE
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(e, &data.email))?;

        Ok(row.into())
    }

    async fn execute_employee_upsert(
        &self,
        id: i64,
        data: &PreparedEmployeeData,
    ) -> AppResult<Employee> {
        // ON CONFLICT only covers the primary key; a clash on email still
        // surfaces as a UNIQUE violation. AUTOINCREMENT never hands out an id
        // below the largest one used, so i64::MAX is refused before this point.
        let sql = format!(
            "INSERT INTO {} (id, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT(id) DO UPDATE SET \
                first_name = excluded.first_name, \
                last_name = excluded.last_name, \
                email = excluded.email \
             RETURNING id, first_name, last_name, email",
            EMPLOYEES_TABLE
        );

        let row = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_database_error(e, &data.email))?;

        Ok(row.into())
    }

    async fn execute_employee_delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", EMPLOYEES_TABLE);

        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete employee: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn execute_employee_delete_all(&self) -> AppResult<u64> {
        let sql = format!("DELETE FROM {}", EMPLOYEES_TABLE);

        let result = sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete employees: {}", e)))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::database::sqlite::schema::init_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn writer() -> SqliteEmployeeWriter {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        SqliteEmployeeWriter::new(pool)
    }

    fn prepared(email: &str) -> PreparedEmployeeData {
        PreparedEmployeeData {
            first_name: "Tom".to_string(),
            last_name: "lin".to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_only_email_clash_is_a_duplicate() {
        let writer = writer().await;
        let saved = writer
            .execute_employee_insert(&prepared("lin@gmail.com"))
            .await
            .unwrap();

        let email_clash = writer
            .execute_employee_insert(&prepared("lin@gmail.com"))
            .await;
        assert!(matches!(email_clash, Err(AppError::DuplicateResource(_))));

        // A plain insert reusing an existing id trips the primary key instead
        let sql = format!(
            "INSERT INTO {} (id, first_name, last_name, email) VALUES (?1, ?2, ?3, ?4)",
            EMPLOYEES_TABLE
        );
        let id_clash = sqlx::query(&sql)
            .bind(saved.id)
            .bind("Tim")
            .bind("lang")
            .bind("lang@gmail.com")
            .execute(&writer.pool)
            .await
            .unwrap_err();

        let mapped = map_database_error(id_clash, "lang@gmail.com");
        assert!(matches!(mapped, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_upsert_onto_taken_email_is_a_duplicate() {
        let writer = writer().await;
        writer
            .execute_employee_insert(&prepared("lin@gmail.com"))
            .await
            .unwrap();
        let other = writer
            .execute_employee_insert(&prepared("lang@gmail.com"))
            .await
            .unwrap();

        let result = writer
            .execute_employee_upsert(other.id.unwrap(), &prepared("lin@gmail.com"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::DuplicateResource(email)) if email == "lin@gmail.com"
        ));
    }
}
