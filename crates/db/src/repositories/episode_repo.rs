//! Repository for the `episodes` table.

use std::collections::HashMap;

use sqlx::PgPool;

use novelmind_core::types::DbId;

use crate::models::episode::{CreateEpisode, Episode, EpisodeDetail, EpisodeNote, UpdateEpisode};
use crate::repositories::EpisodeNoteRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, content, sort_order, created_at, updated_at";

/// Provides CRUD operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// Insert a new episode at the end of a project's list.
    ///
    /// Content starts empty; the position is `max(sort_order) + 1` within
    /// the project (0 for the first episode), assigned in the INSERT itself
    /// so concurrent appends cannot race a separate read.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateEpisode,
    ) -> Result<Episode, sqlx::Error> {
        let query = format!(
            "INSERT INTO episodes (project_id, title, content, sort_order)
             VALUES ($1, $2, '',
                 (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM episodes WHERE project_id = $1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(project_id)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    /// List all episodes of a project, by position.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Episode>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM episodes WHERE project_id = $1 ORDER BY sort_order ASC");
        sqlx::query_as::<_, Episode>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List all episodes of a project with their notes, by position.
    ///
    /// Notes are fetched in one query and grouped, so the cost stays at two
    /// round trips regardless of episode count.
    pub async fn list_detail_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<EpisodeDetail>, sqlx::Error> {
        let episodes = Self::list_by_project(pool, project_id).await?;
        let episode_ids: Vec<DbId> = episodes.iter().map(|e| e.id).collect();

        let notes = sqlx::query_as::<_, EpisodeNote>(
            "SELECT id, episode_id, content, note_type, sort_order, created_at, updated_at
             FROM episode_notes WHERE episode_id = ANY($1)
             ORDER BY sort_order ASC",
        )
        .bind(&episode_ids)
        .fetch_all(pool)
        .await?;

        let mut notes_by_episode: HashMap<DbId, Vec<EpisodeNote>> = HashMap::new();
        for note in notes {
            notes_by_episode.entry(note.episode_id).or_default().push(note);
        }

        Ok(episodes
            .into_iter()
            .map(|episode| {
                let notes = notes_by_episode.remove(&episode.id).unwrap_or_default();
                EpisodeDetail { episode, notes }
            })
            .collect())
    }

    /// Find an episode by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = $1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an episode with its notes.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<EpisodeDetail>, sqlx::Error> {
        let Some(episode) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let notes = EpisodeNoteRepo::list_by_episode(pool, id).await?;
        Ok(Some(EpisodeDetail { episode, notes }))
    }

    /// Update an episode. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisode,
    ) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!(
            "UPDATE episodes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an episode by ID. Notes cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
