//! Employee entity model and wire DTO.

use quest_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee row from the `employee` table.
#[derive(Debug, Clone, FromRow)]
pub struct Employee {
    #[sqlx(rename = "employee_id")]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: String,
    pub salary: i32,
    pub hire_date: Timestamp,
    pub is_active: bool,
    /// Server-set on insert.
    pub created_at: Timestamp,
    /// Server-set on insert and refreshed on every update.
    pub updated_at: Timestamp,
}

/// Insert/replace shape for an employee. The repository assigns the
/// UUID on insert, and the database owns both timestamps.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: String,
    pub salary: i32,
    pub hire_date: Timestamp,
    pub is_active: bool,
}

/// Wire shape of an employee. The server-set timestamps are not part
/// of the API contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Option<DbId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub job_title: String,
    pub salary: i32,
    pub hire_date: Timestamp,
    pub is_active: bool,
}
