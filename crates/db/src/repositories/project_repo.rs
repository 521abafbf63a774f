//! Repository for the `projects` table.

use std::collections::HashMap;

use sqlx::PgPool;

use novelmind_core::types::DbId;

use crate::models::original_work::OriginalWork;
use crate::models::project::{
    CreateProject, Project, ProjectDetail, ProjectWithOriginal, UpdateProject,
};
use crate::repositories::{CharacterRepo, ForeshadowRepo, OriginalWorkRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, original_work_id, timeline_setting, au_settings, \
     active_character_ids, tone, created_at, updated_at";

/// Provides CRUD operations for projects, including transactional
/// child-collection writes.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, original_work_id, timeline_setting, au_settings,
                 active_character_ids, tone)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, '{{}}'::text[]),
                 COALESCE($5, '{{}}'::bigint[]), COALESCE($6, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(input.original_work_id)
            .bind(&input.timeline_setting)
            .bind(&input.au_settings)
            .bind(&input.active_character_ids)
            .bind(&input.tone)
            .fetch_one(pool)
            .await
    }

    /// List all projects, most recently updated first, each with its
    /// referenced original work (if any).
    pub async fn list_with_original(
        pool: &PgPool,
    ) -> Result<Vec<ProjectWithOriginal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY updated_at DESC");
        let projects = sqlx::query_as::<_, Project>(&query).fetch_all(pool).await?;

        let work_ids: Vec<DbId> = projects.iter().filter_map(|p| p.original_work_id).collect();
        let works = sqlx::query_as::<_, OriginalWork>(
            "SELECT id, title, media_type, source, created_at, updated_at
             FROM original_works WHERE id = ANY($1)",
        )
        .bind(&work_ids)
        .fetch_all(pool)
        .await?;
        let works_by_id: HashMap<DbId, OriginalWork> =
            works.into_iter().map(|w| (w.id, w)).collect();

        Ok(projects
            .into_iter()
            .map(|project| {
                let original_work = project
                    .original_work_id
                    .and_then(|id| works_by_id.get(&id).cloned());
                ProjectWithOriginal {
                    project,
                    original_work,
                }
            })
            .collect())
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a fully resolved project: original work detail, custom
    /// characters, and foreshadows.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<ProjectDetail>, sqlx::Error> {
        let Some(project) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let original_work = match project.original_work_id {
            Some(work_id) => OriginalWorkRepo::find_detail(pool, work_id).await?,
            None => None,
        };
        let custom_characters = CharacterRepo::list_by_project(pool, id).await?;
        let foreshadows = ForeshadowRepo::list_by_project(pool, id).await?;

        Ok(Some(ProjectDetail {
            project,
            original_work,
            custom_characters,
            foreshadows,
        }))
    }

    /// Update a project and, when present in the input, sync its custom
    /// character list and replace its foreshadow list -- all in one
    /// transaction so a partial failure cannot leave mismatched child state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_with_children(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                timeline_setting = COALESCE($3, timeline_setting),
                au_settings = COALESCE($4, au_settings),
                active_character_ids = COALESCE($5, active_character_ids),
                tone = COALESCE($6, tone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.timeline_setting)
            .bind(&input.au_settings)
            .bind(&input.active_character_ids)
            .bind(&input.tone)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(project) = project else {
            return Ok(None);
        };

        if let Some(characters) = &input.custom_characters {
            CharacterRepo::sync_for_project(&mut tx, id, characters).await?;
        }
        if let Some(foreshadows) = &input.foreshadows {
            ForeshadowRepo::replace_for_project(&mut tx, id, foreshadows).await?;
        }

        tx.commit().await?;

        Ok(Some(project))
    }

    /// Delete a project by ID. Custom characters, foreshadows, episodes, and
    /// notes cascade. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
