//! Repository for the `world_rules` table.

use sqlx::{PgConnection, PgPool};

use novelmind_core::types::DbId;

use crate::models::world_rule::{CreateWorldRule, UpdateWorldRule, WorldRule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, original_work_id, title, description, created_at, updated_at";

/// Provides CRUD operations and wholesale list replacement for world rules.
pub struct WorldRuleRepo;

impl WorldRuleRepo {
    /// Insert a new world rule under an original work.
    pub async fn create(
        pool: &PgPool,
        original_work_id: DbId,
        input: &CreateWorldRule,
    ) -> Result<WorldRule, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, original_work_id, input).await
    }

    /// Insert a world rule on an existing connection (transaction-safe).
    pub async fn insert(
        conn: &mut PgConnection,
        original_work_id: DbId,
        input: &CreateWorldRule,
    ) -> Result<WorldRule, sqlx::Error> {
        let query = format!(
            "INSERT INTO world_rules (original_work_id, title, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorldRule>(&query)
            .bind(original_work_id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(conn)
            .await
    }

    /// List all world rules of an original work, in insertion order.
    pub async fn list_by_original(
        pool: &PgPool,
        original_work_id: DbId,
    ) -> Result<Vec<WorldRule>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM world_rules WHERE original_work_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, WorldRule>(&query)
            .bind(original_work_id)
            .fetch_all(pool)
            .await
    }

    /// Update a world rule. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorldRule,
    ) -> Result<Option<WorldRule>, sqlx::Error> {
        let query = format!(
            "UPDATE world_rules SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorldRule>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a world rule by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM world_rules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace an original work's rule list wholesale: delete everything,
    /// recreate from `items`. Rules are not referenced by id from anywhere
    /// else, so id churn is acceptable here (unlike characters).
    ///
    /// Must run inside a caller-owned transaction.
    pub async fn replace_for_original(
        conn: &mut PgConnection,
        original_work_id: DbId,
        items: &[CreateWorldRule],
    ) -> Result<Vec<WorldRule>, sqlx::Error> {
        sqlx::query("DELETE FROM world_rules WHERE original_work_id = $1")
            .bind(original_work_id)
            .execute(&mut *conn)
            .await?;

        let mut rules = Vec::with_capacity(items.len());
        for item in items {
            rules.push(Self::insert(&mut *conn, original_work_id, item).await?);
        }
        Ok(rules)
    }
}
