//! Repository for the `employee` table.

use quest_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::employee::{Employee, NewEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "employee_id, first_name, last_name, email, phone, job_title, salary, \
     hire_date, is_active, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee under a freshly generated UUID. Both
    /// timestamps are set by the database on insert.
    pub async fn create(pool: &PgPool, input: &NewEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employee
                (employee_id, first_name, last_name, email, phone, job_title, salary,
                 hire_date, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.job_title)
            .bind(input.salary)
            .bind(input.hire_date)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee WHERE employee_id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all employees, ordered by last then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employee ORDER BY last_name, first_name");
        sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await
    }

    /// Replace every mutable column of an employee. `created_at` is
    /// never touched; `updated_at` is refreshed server-side.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employee SET
                first_name = $2,
                last_name = $3,
                email = $4,
                phone = $5,
                job_title = $6,
                salary = $7,
                hire_date = $8,
                is_active = $9,
                updated_at = NOW()
             WHERE employee_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.job_title)
            .bind(input.salary)
            .bind(input.hire_date)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete an employee by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employee WHERE employee_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
