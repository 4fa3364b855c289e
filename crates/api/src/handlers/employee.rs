//! Handlers for the `/api/employee` resource.

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderName};
use axum::http::StatusCode;
use axum::Json;
use quest_core::types::DbId;
use quest_db::models::employee::EmployeeDto;

use crate::error::{AppError, AppResult};
use crate::handlers::DeleteParams;
use crate::services::EmployeeService;
use crate::state::AppState;

/// GET /api/employee
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeDto>>> {
    let employees = EmployeeService::list(&state.pool).await?;
    Ok(Json(employees))
}

/// GET /api/employee/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EmployeeDto>> {
    let employee = EmployeeService::get(&state.pool, id).await?;
    Ok(Json(employee))
}

/// POST /api/employee
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<EmployeeDto>,
) -> AppResult<(StatusCode, [(HeaderName, String); 1], Json<EmployeeDto>)> {
    let employee = EmployeeService::create(&state.pool, input).await?;
    let id = employee
        .id
        .ok_or_else(|| AppError::InternalError("Created employee has no id".to_string()))?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/employee/{id}"))],
        Json(employee),
    ))
}

/// PUT /api/employee
pub async fn update(
    State(state): State<AppState>,
    Json(input): Json<EmployeeDto>,
) -> AppResult<Json<EmployeeDto>> {
    let employee = EmployeeService::update(&state.pool, input).await?;
    Ok(Json(employee))
}

/// DELETE /api/employee?id={id}
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<DeleteParams>,
) -> AppResult<StatusCode> {
    EmployeeService::delete(&state.pool, params.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
