//! Funtest entity model and wire DTO (demonstration resource).

use quest_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `funtest` table. The free-text column is named
/// `data` in the schema but exposed as `info` everywhere else.
#[derive(Debug, Clone, FromRow)]
pub struct Funtest {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "data")]
    pub info: String,
}

/// Insert/replace shape for a funtest record.
#[derive(Debug, Clone)]
pub struct NewFuntest {
    pub name: String,
    pub info: String,
}

/// Wire shape of a funtest record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuntestDto {
    pub id: Option<DbId>,
    pub name: String,
    pub info: String,
}
