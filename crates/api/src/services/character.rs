//! Business logic for the character resource.
//!
//! Create and update share the same pipeline: normalize the name and
//! class, run the pure validation rules, then check name uniqueness
//! against the store before touching the row. The uniqueness check is
//! read-before-write with no backing constraint, so two concurrent
//! creates with the same name can both pass it.

use quest_core::character::{normalize_class, normalize_name, validate};
use quest_core::error::CoreError;
use quest_core::types::DbId;
use quest_db::models::character::{Character, CharacterDto, NewCharacter};
use quest_db::repositories::CharacterRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

pub struct CharacterService;

impl CharacterService {
    /// Return all characters as DTOs.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<CharacterDto>> {
        let characters = CharacterRepo::list(pool).await?;
        Ok(characters.into_iter().map(to_dto).collect())
    }

    /// Return one character as a DTO, or not-found.
    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<CharacterDto> {
        let character = CharacterRepo::find_by_id(pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Character",
                id,
            })?;
        Ok(to_dto(character))
    }

    /// Validate, normalize, and persist a new character. The id must
    /// be absent from the input; the store assigns it.
    pub async fn create(pool: &PgPool, dto: CharacterDto) -> AppResult<CharacterDto> {
        if dto.id.is_some_and(|id| !id.is_nil()) {
            return Err(AppError::BadRequest(
                "Id must not be set when creating a character.".to_string(),
            ));
        }

        let input = normalize_and_validate(&dto)?;
        ensure_name_available(pool, &input.name, None).await?;

        let character = CharacterRepo::create(pool, &input).await?;
        Ok(to_dto(character))
    }

    /// Validate, normalize, and fully replace an existing character.
    /// The id in the DTO identifies the target row.
    pub async fn update(pool: &PgPool, dto: CharacterDto) -> AppResult<CharacterDto> {
        let id = dto.id.filter(|id| !id.is_nil()).ok_or_else(|| {
            AppError::BadRequest("Id is required when updating a character.".to_string())
        })?;

        let input = normalize_and_validate(&dto)?;
        // Excluding the target row lets a character keep its own name.
        ensure_name_available(pool, &input.name, Some(id)).await?;

        let character = CharacterRepo::update(pool, id, &input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Character",
                id,
            })?;
        Ok(to_dto(character))
    }

    /// Remove a character by id, or not-found if no row matched.
    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let deleted = CharacterRepo::delete(pool, id).await?;
        if deleted {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::NotFound {
                entity: "Character",
                id,
            }))
        }
    }
}

/// Run the pure normalization and validation rules, producing the
/// insert/replace shape on success.
fn normalize_and_validate(dto: &CharacterDto) -> Result<NewCharacter, CoreError> {
    let name = normalize_name(&dto.name);
    let class = normalize_class(&dto.class);
    validate(&name, &class, dto.level, dto.health)?;

    Ok(NewCharacter {
        name,
        class,
        level: dto.level,
        health: dto.health,
        mana: dto.mana,
    })
}

/// Reject the request if another row already uses `name`
/// case-insensitively.
async fn ensure_name_available(
    pool: &PgPool,
    name: &str,
    exclude_id: Option<DbId>,
) -> AppResult<()> {
    if CharacterRepo::name_exists(pool, name, exclude_id).await? {
        return Err(AppError::Core(CoreError::Validation(format!(
            "A character with the name '{name}' already exists."
        ))));
    }
    Ok(())
}

fn to_dto(character: Character) -> CharacterDto {
    CharacterDto {
        id: Some(character.id),
        name: character.name,
        class: character.class,
        level: character.level,
        health: character.health,
        mana: character.mana,
    }
}
