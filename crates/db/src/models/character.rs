//! Character entity model and wire DTO.

use quest_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A character row from the `character` table.
#[derive(Debug, Clone, FromRow)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub class: String,
    pub level: i32,
    pub health: i32,
    pub mana: i32,
}

/// Insert/replace shape for a character. The repository assigns the
/// UUID on insert; updates replace every mutable column.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub class: String,
    pub level: i32,
    pub health: i32,
    pub mana: i32,
}

/// Wire shape of a character. `id` is absent on create and required
/// on update; the service owns the mapping to and from [`Character`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDto {
    pub id: Option<DbId>,
    pub name: String,
    pub class: String,
    pub level: i32,
    pub health: i32,
    pub mana: i32,
}
