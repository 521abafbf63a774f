//! Repository for the `foreshadows` table.

use sqlx::{PgConnection, PgPool};

use novelmind_core::types::DbId;

use crate::models::foreshadow::{CreateForeshadow, Foreshadow, UpdateForeshadow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status, planted_at, \
     expected_payoff, created_at, updated_at";

/// Provides CRUD operations and wholesale list replacement for foreshadows.
pub struct ForeshadowRepo;

impl ForeshadowRepo {
    /// Insert a new foreshadow under a project.
    ///
    /// If `status` is `None`, defaults to `Pending`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateForeshadow,
    ) -> Result<Foreshadow, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert(&mut conn, project_id, input).await
    }

    /// Insert a foreshadow on an existing connection (transaction-safe).
    pub async fn insert(
        conn: &mut PgConnection,
        project_id: DbId,
        input: &CreateForeshadow,
    ) -> Result<Foreshadow, sqlx::Error> {
        let query = format!(
            "INSERT INTO foreshadows
                (project_id, title, description, status, planted_at, expected_payoff)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, 'Pending'), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Foreshadow>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.planted_at)
            .bind(&input.expected_payoff)
            .fetch_one(conn)
            .await
    }

    /// List all foreshadows of a project, in insertion order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Foreshadow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM foreshadows WHERE project_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Foreshadow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a foreshadow. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateForeshadow,
    ) -> Result<Option<Foreshadow>, sqlx::Error> {
        let query = format!(
            "UPDATE foreshadows SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                planted_at = COALESCE($5, planted_at),
                expected_payoff = COALESCE($6, expected_payoff)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Foreshadow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.planted_at)
            .bind(&input.expected_payoff)
            .fetch_optional(pool)
            .await
    }

    /// Delete a foreshadow by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM foreshadows WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a project's foreshadow list wholesale: delete everything,
    /// recreate from `items`. Must run inside a caller-owned transaction.
    pub async fn replace_for_project(
        conn: &mut PgConnection,
        project_id: DbId,
        items: &[CreateForeshadow],
    ) -> Result<Vec<Foreshadow>, sqlx::Error> {
        sqlx::query("DELETE FROM foreshadows WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;

        let mut foreshadows = Vec::with_capacity(items.len());
        for item in items {
            foreshadows.push(Self::insert(&mut *conn, project_id, item).await?);
        }
        Ok(foreshadows)
    }
}
