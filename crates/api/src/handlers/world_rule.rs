//! Handlers for the world-rule sub-resource:
//! `/originals/{original_id}/world-rules[/{id}]`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::validate_title;
use novelmind_core::error::CoreError;
use novelmind_core::types::DbId;
use novelmind_db::models::world_rule::{CreateWorldRule, UpdateWorldRule, WorldRule};
use novelmind_db::repositories::WorldRuleRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/originals/{original_id}/world-rules
pub async fn create(
    State(state): State<AppState>,
    Path(original_id): Path<DbId>,
    Json(input): Json<CreateWorldRule>,
) -> AppResult<(StatusCode, Json<WorldRule>)> {
    validate_title(&input.title)?;
    let rule = WorldRuleRepo::create(&state.pool, original_id, &input).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

/// GET /api/v1/originals/{original_id}/world-rules
pub async fn list(
    State(state): State<AppState>,
    Path(original_id): Path<DbId>,
) -> AppResult<Json<Vec<WorldRule>>> {
    let rules = WorldRuleRepo::list_by_original(&state.pool, original_id).await?;
    Ok(Json(rules))
}

/// PUT /api/v1/originals/{original_id}/world-rules/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((_original_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateWorldRule>,
) -> AppResult<Json<WorldRule>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    let rule = WorldRuleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorldRule",
            id,
        }))?;
    Ok(Json(rule))
}

/// DELETE /api/v1/originals/{original_id}/world-rules/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_original_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = WorldRuleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WorldRule",
            id,
        }))
    }
}
