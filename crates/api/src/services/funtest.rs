//! Business logic for the funtest demonstration resource.

use quest_core::error::CoreError;
use quest_core::types::DbId;
use quest_db::models::funtest::{Funtest, FuntestDto, NewFuntest};
use quest_db::repositories::FuntestRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

pub struct FuntestService;

impl FuntestService {
    /// Return all funtest records as DTOs.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<FuntestDto>> {
        let records = FuntestRepo::list(pool).await?;
        Ok(records.into_iter().map(to_dto).collect())
    }

    /// Return one funtest record as a DTO, or not-found.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<FuntestDto> {
        let record = FuntestRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Funtest",
                id,
            })?;
        Ok(to_dto(record))
    }

    /// Persist a new funtest record. The id must be absent.
    pub async fn create(pool: &PgPool, dto: FuntestDto) -> AppResult<FuntestDto> {
        if dto.id.is_some_and(|id| !id.is_nil()) {
            return Err(AppError::BadRequest(
                "Id must not be set when creating a funtest record.".to_string(),
            ));
        }

        let record = FuntestRepo::create(
            pool,
            &NewFuntest {
                name: dto.name,
                info: dto.info,
            },
        )
        .await?;
        Ok(to_dto(record))
    }

    /// Fully replace an existing funtest record, identified by the DTO id.
    pub async fn update(pool: &PgPool, dto: FuntestDto) -> AppResult<FuntestDto> {
        let id = dto.id.filter(|id| !id.is_nil()).ok_or_else(|| {
            AppError::BadRequest("Id is required when updating a funtest record.".to_string())
        })?;

        let record = FuntestRepo::update(
            pool,
            id,
            &NewFuntest {
                name: dto.name,
                info: dto.info,
            },
        )
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Funtest",
            id,
        })?;
        Ok(to_dto(record))
    }

    /// Remove a funtest record by id, or not-found if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let deleted = FuntestRepo::delete(pool, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::NotFound {
                entity: "Funtest",
                id,
            }))
        }
    }
}

fn to_dto(record: Funtest) -> FuntestDto {
    FuntestDto {
        id: Some(record.id),
        name: record.name,
        info: record.info,
    }
}
