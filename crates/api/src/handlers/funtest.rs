//! Handlers for the `/api/funtest` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use quest_core::types::DbId;
use quest_db::models::funtest::FuntestDto;

use crate::error::{AppError, AppResult};
use crate::handlers::DeleteParams;
use crate::services::FuntestService;
use crate::state::AppState;

/// GET /api/funtest
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FuntestDto>>> {
    let records = FuntestService::list(&state.pool).await?;
    Ok(Json(records))
}

/// GET /api/funtest/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FuntestDto>> {
    let record = FuntestService::get(&state.pool, id).await?;
    Ok(Json(record))
}

/// POST /api/funtest
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<FuntestDto>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<FuntestDto>)> {
    let record = FuntestService::create(&state.pool, input).await?;
    let id = record
        .id
        .ok_or_else(|| AppError::InternalError("Created funtest record has no id".to_string()))?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/funtest/{id}"))],
        Json(record),
    ))
}

/// PUT /api/funtest
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<FuntestDto>,
) -> AppResult<Json<FuntestDto>> {
    let record = FuntestService::update(&state.pool, input).await?;
    Ok(Json(record))
}

/// DELETE /api/funtest?id={id}
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<StatusCode> {
    FuntestService::delete(&state.pool, params.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
