//! Repository for the `characters` table.
//!
//! Characters are owned by exactly one original work (canon) or one project
//! (custom); the owner id is always supplied by the caller, never taken
//! from a request body.

use sqlx::{PgConnection, PgPool};

use novelmind_core::types::DbId;

use crate::models::character::{Character, CharacterUpsert, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, original_work_id, project_id, name, is_canon, description, \
     personality, appearance, abilities, speech_patterns, relationships, \
     created_at, updated_at";

/// Provides CRUD operations and owner-scoped list sync for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a canon character under an original work.
    pub async fn create_for_original(
        pool: &PgPool,
        original_work_id: DbId,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert_for_original(&mut conn, original_work_id, input).await
    }

    /// Insert a custom character under a project.
    pub async fn create_for_project(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert_for_project(&mut conn, project_id, input).await
    }

    /// Insert a canon character on an existing connection (transaction-safe).
    pub async fn insert_for_original(
        conn: &mut PgConnection,
        original_work_id: DbId,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        Self::insert(conn, Some(original_work_id), None, input).await
    }

    /// Insert a custom character on an existing connection (transaction-safe).
    pub async fn insert_for_project(
        conn: &mut PgConnection,
        project_id: DbId,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        Self::insert(conn, None, Some(project_id), input).await
    }

    /// Insert a character under the given owner. `is_canon` follows the
    /// owner: original-work characters are canon, project characters are not.
    async fn insert(
        conn: &mut PgConnection,
        original_work_id: Option<DbId>,
        project_id: Option<DbId>,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (original_work_id, project_id, name, is_canon, description,
                 personality, appearance, abilities, speech_patterns, relationships)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''),
                 COALESCE($6, '{{}}'::text[]), COALESCE($7, '{{}}'::text[]),
                 COALESCE($8, '{{}}'::text[]), COALESCE($9, '{{}}'::text[]),
                 COALESCE($10, '[]'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(original_work_id)
            .bind(project_id)
            .bind(&input.name)
            .bind(original_work_id.is_some())
            .bind(&input.description)
            .bind(&input.personality)
            .bind(&input.appearance)
            .bind(&input.abilities)
            .bind(&input.speech_patterns)
            .bind(&input.relationships)
            .fetch_one(conn)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the canon characters of an original work, in insertion order.
    pub async fn list_by_original(
        pool: &PgPool,
        original_work_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters WHERE original_work_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(original_work_id)
            .fetch_all(pool)
            .await
    }

    /// List the custom characters of a project, in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM characters WHERE project_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a character. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                personality = COALESCE($4, personality),
                appearance = COALESCE($5, appearance),
                abilities = COALESCE($6, abilities),
                speech_patterns = COALESCE($7, speech_patterns),
                relationships = COALESCE($8, relationships)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.personality)
            .bind(&input.appearance)
            .bind(&input.abilities)
            .bind(&input.speech_patterns)
            .bind(&input.relationships)
            .fetch_optional(pool)
            .await
    }

    /// Delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Sync an original work's canon character list against `items`.
    /// See [`Self::sync`] for the semantics.
    pub async fn sync_for_original(
        conn: &mut PgConnection,
        original_work_id: DbId,
        items: &[CharacterUpsert],
    ) -> Result<Vec<Character>, sqlx::Error> {
        Self::sync(conn, "original_work_id", original_work_id, items).await
    }

    /// Sync a project's custom character list against `items`.
    /// See [`Self::sync`] for the semantics.
    pub async fn sync_for_project(
        conn: &mut PgConnection,
        project_id: DbId,
        items: &[CharacterUpsert],
    ) -> Result<Vec<Character>, sqlx::Error> {
        Self::sync(conn, "project_id", project_id, items).await
    }

    /// Replace an owner's character list while preserving the ids of
    /// surviving rows:
    ///
    /// 1. Delete rows owned by the parent whose ids are absent from `items`.
    /// 2. Items carrying an `id` fully replace that row's content fields.
    /// 3. Items without an `id` are inserted.
    ///
    /// Must run inside a caller-owned transaction so a partial failure
    /// cannot leave the list half-replaced. An item id that does not belong
    /// to this owner fails with `RowNotFound` and rolls the caller back.
    async fn sync(
        conn: &mut PgConnection,
        owner_column: &str,
        owner_id: DbId,
        items: &[CharacterUpsert],
    ) -> Result<Vec<Character>, sqlx::Error> {
        let keep_ids: Vec<DbId> = items.iter().filter_map(|c| c.id).collect();

        let delete = format!(
            "DELETE FROM characters WHERE {owner_column} = $1 AND NOT (id = ANY($2))"
        );
        sqlx::query(&delete)
            .bind(owner_id)
            .bind(&keep_ids)
            .execute(&mut *conn)
            .await?;

        let update = format!(
            "UPDATE characters SET
                name = $3,
                description = COALESCE($4, ''),
                personality = COALESCE($5, '{{}}'::text[]),
                appearance = COALESCE($6, '{{}}'::text[]),
                abilities = COALESCE($7, '{{}}'::text[]),
                speech_patterns = COALESCE($8, '{{}}'::text[]),
                relationships = COALESCE($9, '[]'::jsonb)
             WHERE id = $2 AND {owner_column} = $1
             RETURNING {COLUMNS}"
        );

        let mut synced = Vec::with_capacity(items.len());
        for item in items {
            let character = match item.id {
                Some(id) => {
                    sqlx::query_as::<_, Character>(&update)
                        .bind(owner_id)
                        .bind(id)
                        .bind(&item.name)
                        .bind(&item.description)
                        .bind(&item.personality)
                        .bind(&item.appearance)
                        .bind(&item.abilities)
                        .bind(&item.speech_patterns)
                        .bind(&item.relationships)
                        .fetch_one(&mut *conn)
                        .await?
                }
                None => {
                    let create = item.to_create();
                    if owner_column == "original_work_id" {
                        Self::insert(&mut *conn, Some(owner_id), None, &create).await?
                    } else {
                        Self::insert(&mut *conn, None, Some(owner_id), &create).await?
                    }
                }
            };
            synced.push(character);
        }

        Ok(synced)
    }
}
