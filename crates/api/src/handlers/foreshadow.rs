//! Handlers for the foreshadow sub-resource:
//! `/projects/{project_id}/foreshadows[/{id}]`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::{validate_foreshadow_status, validate_title};
use novelmind_core::error::CoreError;
use novelmind_core::types::DbId;
use novelmind_db::models::foreshadow::{CreateForeshadow, Foreshadow, UpdateForeshadow};
use novelmind_db::repositories::ForeshadowRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/foreshadows
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateForeshadow>,
) -> AppResult<(StatusCode, Json<Foreshadow>)> {
    validate_title(&input.title)?;
    if let Some(status) = &input.status {
        validate_foreshadow_status(status)?;
    }
    let foreshadow = ForeshadowRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(foreshadow)))
}

/// GET /api/v1/projects/{project_id}/foreshadows
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Foreshadow>>> {
    let foreshadows = ForeshadowRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(foreshadows))
}

/// PUT /api/v1/projects/{project_id}/foreshadows/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateForeshadow>,
) -> AppResult<Json<Foreshadow>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(status) = &input.status {
        validate_foreshadow_status(status)?;
    }
    let foreshadow = ForeshadowRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Foreshadow",
            id,
        }))?;
    Ok(Json(foreshadow))
}

/// DELETE /api/v1/projects/{project_id}/foreshadows/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_project_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = ForeshadowRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Foreshadow",
            id,
        }))
    }
}
