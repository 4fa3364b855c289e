//! Handlers for the `/api/character` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use quest_core::types::DbId;
use quest_db::models::character::CharacterDto;

use crate::error::{AppError, AppResult};
use crate::handlers::DeleteParams;
use crate::services::CharacterService;
use crate::state::AppState;

/// GET /api/character
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterDto>>> {
    let characters = CharacterService::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /api/character/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDto>> {
    let character = CharacterService::get(&state.pool, id).await?;
    Ok(Json(character))
}

/// POST /api/character
///
/// Responds 201 with a `Location` header pointing at the created row.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CharacterDto>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<CharacterDto>)> {
    let character = CharacterService::create(&state.pool, input).await?;
    let id = character
        .id
        .ok_or_else(|| AppError::InternalError("Created character has no id".to_string()))?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/character/{id}"))],
        Json(character),
    ))
}

/// PUT /api/character
///
/// Full replace; the body's `id` identifies the target row.
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<CharacterDto>,
) -> AppResult<Json<CharacterDto>> {
    let character = CharacterService::update(&state.pool, input).await?;
    Ok(Json(character))
}

/// DELETE /api/character?id={id}
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<StatusCode> {
    CharacterService::delete(&state.pool, params.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
