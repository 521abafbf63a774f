//! World rule entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use novelmind_core::types::{DbId, Timestamp};

/// A world-building rule row from the `world_rules` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorldRule {
    pub id: DbId,
    pub original_work_id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new world rule. Also used as the item shape when a
/// work update replaces its rule list wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorldRule {
    pub title: String,
    pub description: String,
}

/// DTO for updating an existing world rule. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorldRule {
    pub title: Option<String>,
    pub description: Option<String>,
}
