//! Episode and episode note models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use novelmind_core::types::{DbId, Timestamp};

/// An episode row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    /// Full episode text (threads joined into one continuous body).
    pub content: String,
    /// Monotonic position within the project; appended as max + 1.
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An episode with its notes in order.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeDetail {
    #[serde(flatten)]
    pub episode: Episode,
    pub notes: Vec<EpisodeNote>,
}

/// DTO for creating a new episode. Content starts empty; the position is
/// assigned server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisode {
    pub title: String,
}

/// DTO for updating an existing episode. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEpisode {
    pub title: Option<String>,
    pub content: Option<String>,
    pub sort_order: Option<i32>,
}

/// An episode note row from the `episode_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EpisodeNote {
    pub id: DbId,
    pub episode_id: DbId,
    pub content: String,
    /// One of: General, Dialogue, Plot, Draft.
    pub note_type: String,
    /// Monotonic position within the episode; appended as max + 1.
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new episode note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEpisodeNote {
    pub content: Option<String>,
    /// Defaults to `General` if omitted.
    pub note_type: Option<String>,
}

/// DTO for updating an existing episode note. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEpisodeNote {
    pub content: Option<String>,
    pub note_type: Option<String>,
    pub sort_order: Option<i32>,
}
