//! Repository for the `original_works` table.

use sqlx::PgPool;

use novelmind_core::catalog::SOURCE_CUSTOM;
use novelmind_core::types::DbId;

use crate::models::original_work::{
    CreateOriginalWork, OriginalWork, OriginalWorkDetail, UpdateOriginalWork,
};
use crate::repositories::{CharacterRepo, WorldRuleRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, media_type, source, created_at, updated_at";

/// Provides CRUD operations for original works, including transactional
/// child-collection writes.
pub struct OriginalWorkRepo;

impl OriginalWorkRepo {
    /// Insert a new original work together with any initial canon characters
    /// and world rules, all in one transaction.
    ///
    /// API-created works are always tagged `Custom`; `Preset` rows only come
    /// from seed migrations.
    pub async fn create_with_children(
        pool: &PgPool,
        input: &CreateOriginalWork,
    ) -> Result<OriginalWorkDetail, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO original_works (title, media_type, source)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let work = sqlx::query_as::<_, OriginalWork>(&query)
            .bind(&input.title)
            .bind(&input.media_type)
            .bind(SOURCE_CUSTOM)
            .fetch_one(&mut *tx)
            .await?;

        let mut canon_characters = Vec::with_capacity(input.canon_characters.len());
        for character in &input.canon_characters {
            canon_characters
                .push(CharacterRepo::insert_for_original(&mut tx, work.id, character).await?);
        }

        let mut world_rules = Vec::with_capacity(input.world_rules.len());
        for rule in &input.world_rules {
            world_rules.push(WorldRuleRepo::insert(&mut tx, work.id, rule).await?);
        }

        tx.commit().await?;

        Ok(OriginalWorkDetail {
            work,
            canon_characters,
            world_rules,
        })
    }

    /// List all original works, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<OriginalWork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM original_works ORDER BY created_at DESC");
        sqlx::query_as::<_, OriginalWork>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find an original work by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OriginalWork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM original_works WHERE id = $1");
        sqlx::query_as::<_, OriginalWork>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an original work with its canon characters and world rules.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<OriginalWorkDetail>, sqlx::Error> {
        let Some(work) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let canon_characters = CharacterRepo::list_by_original(pool, id).await?;
        let world_rules = WorldRuleRepo::list_by_original(pool, id).await?;
        Ok(Some(OriginalWorkDetail {
            work,
            canon_characters,
            world_rules,
        }))
    }

    /// Update an original work and, when present in the input, sync its
    /// character list and replace its rule list -- all in one transaction so
    /// a partial failure cannot leave mismatched child state.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_with_children(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOriginalWork,
    ) -> Result<Option<OriginalWorkDetail>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE original_works SET
                title = COALESCE($2, title),
                media_type = COALESCE($3, media_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let work = sqlx::query_as::<_, OriginalWork>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.media_type)
            .fetch_optional(&mut *tx)
            .await?;

        if work.is_none() {
            return Ok(None);
        }

        if let Some(characters) = &input.canon_characters {
            CharacterRepo::sync_for_original(&mut tx, id, characters).await?;
        }
        if let Some(rules) = &input.world_rules {
            WorldRuleRepo::replace_for_original(&mut tx, id, rules).await?;
        }

        tx.commit().await?;

        Self::find_detail(pool, id).await
    }

    /// Delete an original work by ID. Canon characters and world rules
    /// cascade; referring projects keep running with a NULL reference.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM original_works WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
