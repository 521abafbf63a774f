//! Handlers for episode notes.
//!
//! Creation is episode-scoped (`/episodes/{episode_id}/notes`); item
//! operations address notes directly (`/notes/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use novelmind_core::catalog::validate_note_type;
use novelmind_core::error::CoreError;
use novelmind_core::types::DbId;
use novelmind_db::models::episode::{CreateEpisodeNote, EpisodeNote, UpdateEpisodeNote};
use novelmind_db::repositories::EpisodeNoteRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/episodes/{episode_id}/notes
///
/// Appends to the end of the episode's note list (max order + 1).
pub async fn create(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
    Json(input): Json<CreateEpisodeNote>,
) -> AppResult<(StatusCode, Json<EpisodeNote>)> {
    if let Some(note_type) = &input.note_type {
        validate_note_type(note_type)?;
    }
    let note = EpisodeNoteRepo::create(&state.pool, episode_id, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/episodes/{episode_id}/notes
pub async fn list_by_episode(
    State(state): State<AppState>,
    Path(episode_id): Path<DbId>,
) -> AppResult<Json<Vec<EpisodeNote>>> {
    let notes = EpisodeNoteRepo::list_by_episode(&state.pool, episode_id).await?;
    Ok(Json(notes))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisodeNote>,
) -> AppResult<Json<EpisodeNote>> {
    if let Some(note_type) = &input.note_type {
        validate_note_type(note_type)?;
    }
    let note = EpisodeNoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EpisodeNote",
            id,
        }))?;
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EpisodeNoteRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "EpisodeNote",
            id,
        }))
    }
}
