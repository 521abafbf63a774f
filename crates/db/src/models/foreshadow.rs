//! Foreshadow entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use novelmind_core::types::{DbId, Timestamp};

/// A foreshadow row from the `foreshadows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Foreshadow {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    /// One of: Pending, InProgress, Resolved, Dropped.
    pub status: String,
    /// Where the setup was planted (episode or chapter marker).
    pub planted_at: Option<String>,
    /// Expected payoff note.
    pub expected_payoff: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new foreshadow. Also used as the item shape when a
/// project update replaces its foreshadow list wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateForeshadow {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `Pending` if omitted.
    pub status: Option<String>,
    pub planted_at: Option<String>,
    pub expected_payoff: Option<String>,
}

/// DTO for updating an existing foreshadow. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateForeshadow {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub planted_at: Option<String>,
    pub expected_payoff: Option<String>,
}
