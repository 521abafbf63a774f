//! Handlers for episodes.
//!
//! Listing and creation are project-scoped
//! (`/projects/{project_id}/episodes`); item operations address episodes
//! directly (`/episodes/{id}`), matching how the client edits them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::validate_title;
use novelmind_core::error::CoreError;
use novelmind_core::types::DbId;
use novelmind_db::models::episode::{CreateEpisode, Episode, EpisodeDetail, UpdateEpisode};
use novelmind_db::repositories::EpisodeRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/episodes
///
/// Appends to the end of the project's episode list (max order + 1).
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateEpisode>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    validate_title(&input.title)?;
    let episode = EpisodeRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /api/v1/projects/{project_id}/episodes
///
/// Episodes in position order, each with its notes in position order.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<EpisodeDetail>>> {
    let episodes = EpisodeRepo::list_detail_by_project(&state.pool, project_id).await?;
    Ok(Json(episodes))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EpisodeDetail>> {
    let detail = EpisodeRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisode>,
) -> AppResult<Json<Episode>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    let episode = EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))?;
    Ok(Json(episode))
}

/// DELETE /api/v1/episodes/{id}
///
/// Notes cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EpisodeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Episode",
            id,
        }))
    }
}
