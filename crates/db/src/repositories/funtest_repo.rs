//! Repository for the `funtest` table.

use quest_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::funtest::{Funtest, NewFuntest};

/// Column list shared across queries. The free-text column is named
/// `data` in the schema.
const COLUMNS: &str = "id, name, data";

/// Provides CRUD operations for funtest records.
pub struct FuntestRepo;

impl FuntestRepo {
    /// Insert a new funtest record under a freshly generated UUID.
    pub async fn create(pool: &PgPool, input: &NewFuntest) -> Result<Funtest, sqlx::Error> {
        let query = format!(
            "INSERT INTO funtest (id, name, data)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Funtest>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.info)
            .fetch_one(pool)
            .await
    }

    /// Find a funtest record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Funtest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM funtest WHERE id = $1");
        sqlx::query_as::<_, Funtest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all funtest records, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Funtest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM funtest ORDER BY name ASC");
        sqlx::query_as::<_, Funtest>(&query).fetch_all(pool).await
    }

    /// Replace every mutable column of a funtest record.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewFuntest,
    ) -> Result<Option<Funtest>, sqlx::Error> {
        let query = format!(
            "UPDATE funtest SET name = $2, data = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Funtest>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.info)
            .fetch_optional(pool)
            .await
    }

    /// Delete a funtest record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM funtest WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
