//! Handlers for character sub-resources.
//!
//! Characters are nested under their owner:
//! `/originals/{original_id}/characters[/{id}]` for canon characters and
//! `/projects/{project_id}/characters[/{id}]` for custom characters. The
//! owner id always comes from the URL path, never from the body, so the
//! single-owner invariant cannot be subverted by a request.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::validate_character_name;
use novelmind_core::error::CoreError;
use novelmind_core::types::DbId;
use novelmind_db::models::character::{Character, CreateCharacter, UpdateCharacter};
use novelmind_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/originals/{original_id}/characters
pub async fn create_canon(
    State(state): State<AppState>,
    Path(original_id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_character_name(&input.name)?;
    let character = CharacterRepo::create_for_original(&state.pool, original_id, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/originals/{original_id}/characters
pub async fn list_canon(
    State(state): State<AppState>,
    Path(original_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_by_original(&state.pool, original_id).await?;
    Ok(Json(characters))
}

/// POST /api/v1/projects/{project_id}/characters
pub async fn create_custom(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_character_name(&input.name)?;
    let character = CharacterRepo::create_for_project(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/projects/{project_id}/characters
pub async fn list_custom(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Character>>> {
    let characters = CharacterRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(characters))
}

/// GET under either owner scope: `/{owner_id}/characters/{id}`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_owner_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Character>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// PUT under either owner scope: `/{owner_id}/characters/{id}`.
pub async fn update(
    State(state): State<AppState>,
    Path((_owner_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateCharacter>,
) -> AppResult<Json<Character>> {
    if let Some(name) = &input.name {
        validate_character_name(name)?;
    }
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE under either owner scope: `/{owner_id}/characters/{id}`.
pub async fn delete(
    State(state): State<AppState>,
    Path((_owner_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}
