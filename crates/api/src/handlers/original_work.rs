//! Handlers for the `/originals` resource.
//!
//! An original work carries its canon characters and world rules; the
//! detail endpoints return all three together, and the PUT endpoint syncs
//! the child collections in the same transaction as the row update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::{validate_character_name, validate_media_type, validate_title};
use novelmind_core::error::CoreError;
use novelmind_core::types::DbId;
use novelmind_db::models::original_work::{
    CreateOriginalWork, OriginalWork, OriginalWorkDetail, UpdateOriginalWork,
};
use novelmind_db::repositories::OriginalWorkRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/originals
///
/// Creates the work together with any initial canon characters and world
/// rules. The provenance tag is always `Custom` for API-created works.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOriginalWork>,
) -> AppResult<(StatusCode, Json<OriginalWorkDetail>)> {
    validate_title(&input.title)?;
    validate_media_type(&input.media_type)?;
    for character in &input.canon_characters {
        validate_character_name(&character.name)?;
    }

    let detail = OriginalWorkRepo::create_with_children(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// GET /api/v1/originals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<OriginalWork>>> {
    let works = OriginalWorkRepo::list(&state.pool).await?;
    Ok(Json(works))
}

/// GET /api/v1/originals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<OriginalWorkDetail>> {
    let detail = OriginalWorkRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OriginalWork",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/originals/{id}
///
/// Scalar fields are patched when present. A `canon_characters` list is
/// synced id-preservingly; a `world_rules` list is replaced wholesale.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOriginalWork>,
) -> AppResult<Json<OriginalWorkDetail>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(media_type) = &input.media_type {
        validate_media_type(media_type)?;
    }
    if let Some(characters) = &input.canon_characters {
        for character in characters {
            validate_character_name(&character.name)?;
        }
    }

    let detail = OriginalWorkRepo::update_with_children(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "OriginalWork",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /api/v1/originals/{id}
///
/// Canon characters and world rules cascade; referring projects keep their
/// other data and lose only the reference.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OriginalWorkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "OriginalWork",
            id,
        }))
    }
}
