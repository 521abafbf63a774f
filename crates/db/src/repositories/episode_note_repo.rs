//! Repository for the `episode_notes` table.

use sqlx::PgPool;

use novelmind_core::types::DbId;

use crate::models::episode::{CreateEpisodeNote, EpisodeNote, UpdateEpisodeNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, episode_id, content, note_type, sort_order, created_at, updated_at";

/// Provides CRUD operations for episode notes.
pub struct EpisodeNoteRepo;

impl EpisodeNoteRepo {
    /// Insert a new note at the end of an episode's list.
    ///
    /// If `note_type` is `None`, defaults to `General`. The position is
    /// `max(sort_order) + 1` within the episode, assigned in the INSERT.
    pub async fn create(
        pool: &PgPool,
        episode_id: DbId,
        input: &CreateEpisodeNote,
    ) -> Result<EpisodeNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO episode_notes (episode_id, content, note_type, sort_order)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, 'General'),
                 (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM episode_notes WHERE episode_id = $1))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EpisodeNote>(&query)
            .bind(episode_id)
            .bind(&input.content)
            .bind(&input.note_type)
            .fetch_one(pool)
            .await
    }

    /// List all notes of an episode, by position.
    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<EpisodeNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episode_notes WHERE episode_id = $1 ORDER BY sort_order ASC"
        );
        sqlx::query_as::<_, EpisodeNote>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// Update a note. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEpisodeNote,
    ) -> Result<Option<EpisodeNote>, sqlx::Error> {
        let query = format!(
            "UPDATE episode_notes SET
                content = COALESCE($2, content),
                note_type = COALESCE($3, note_type),
                sort_order = COALESCE($4, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EpisodeNote>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(&input.note_type)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episode_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
