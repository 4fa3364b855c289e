//! Repository for the `character` table.

use quest_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::character::{Character, NewCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, class, level, health, mana";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character under a freshly generated UUID,
    /// returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO character (id, name, class, level, health, mana)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.name)
            .bind(&input.class)
            .bind(input.level)
            .bind(input.health)
            .bind(input.mana)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters, ordered by name ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character ORDER BY name ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Replace every mutable column of a character.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE character SET
                name = $2,
                class = $3,
                level = $4,
                health = $5,
                mana = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.class)
            .bind(input.level)
            .bind(input.health)
            .bind(input.mana)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM character WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive check for an existing character name.
    ///
    /// `exclude_id` lets the update path skip the row being updated,
    /// so a character can keep its own name. There is no unique
    /// constraint backing this check; two concurrent creates can
    /// still both pass it.
    pub async fn name_exists(
        pool: &PgPool,
        name: &str,
        exclude_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM character
                WHERE LOWER(name) = LOWER($1)
                  AND ($2::uuid IS NULL OR id <> $2)
             )",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(pool)
        .await
    }
}
