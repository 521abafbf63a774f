//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::{
    validate_character_name, validate_foreshadow_status, validate_title,
};
use novelmind_core::error::CoreError;
use novelmind_core::tone::ToneProfile;
use novelmind_core::types::DbId;
use novelmind_db::models::project::{
    CreateProject, Project, ProjectDetail, ProjectWithOriginal, UpdateProject,
};
use novelmind_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_title(&input.title)?;
    if let Some(tone) = &input.tone {
        ToneProfile::from_value(tone).validate()?;
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
///
/// Most recently updated first, each with its referenced original work.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithOriginal>>> {
    let projects = ProjectRepo::list_with_original(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectDetail>> {
    let detail = ProjectRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/projects/{id}
///
/// Scalar fields are patched when present. A `custom_characters` list is
/// synced id-preservingly and a `foreshadows` list is replaced wholesale,
/// both inside the same transaction as the row update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<ProjectDetail>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(tone) = &input.tone {
        ToneProfile::from_value(tone).validate()?;
    }
    if let Some(characters) = &input.custom_characters {
        for character in characters {
            validate_character_name(&character.name)?;
        }
    }
    if let Some(foreshadows) = &input.foreshadows {
        for foreshadow in foreshadows {
            if let Some(status) = &foreshadow.status {
                validate_foreshadow_status(status)?;
            }
        }
    }

    ProjectRepo::update_with_children(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    // Return the fully resolved project, matching the GET shape.
    let detail = ProjectRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(detail))
}

/// DELETE /api/v1/projects/{id}
///
/// Custom characters, foreshadows, episodes, and notes cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
