pub mod character;
pub mod employee;
pub mod funtest;

use quest_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `DELETE /api/{resource}?id={id}`.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: DbId,
}
