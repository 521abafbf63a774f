//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use novelmind_core::types::{DbId, Timestamp};

use crate::models::character::{Character, CharacterUpsert};
use crate::models::foreshadow::{CreateForeshadow, Foreshadow};
use crate::models::original_work::{OriginalWork, OriginalWorkDetail};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    /// The original work this project is based on. Optional; set to NULL
    /// when the referenced work is deleted.
    pub original_work_id: Option<DbId>,
    /// Timeline/setting description, e.g. "엔딩 이후".
    pub timeline_setting: String,
    /// AU setting tags, e.g. "현대물", "학원물".
    pub au_settings: Vec<String>,
    /// Character ids active in the current scene.
    pub active_character_ids: Vec<DbId>,
    /// Tone profile value object, stored as JSONB.
    pub tone: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with its referenced original work, as returned by list views.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithOriginal {
    #[serde(flatten)]
    pub project: Project,
    pub original_work: Option<OriginalWork>,
}

/// A fully resolved project: original work detail, custom characters, and
/// foreshadows.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    pub original_work: Option<OriginalWorkDetail>,
    pub custom_characters: Vec<Character>,
    pub foreshadows: Vec<Foreshadow>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub original_work_id: Option<DbId>,
    pub timeline_setting: Option<String>,
    pub au_settings: Option<Vec<String>>,
    pub active_character_ids: Option<Vec<DbId>>,
    pub tone: Option<serde_json::Value>,
}

/// DTO for updating a project.
///
/// Scalar fields are patched when present. `custom_characters` (when
/// present) is synced id-preservingly; `foreshadows` (when present) is
/// replaced wholesale. Both child syncs run in the same transaction as the
/// row update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub timeline_setting: Option<String>,
    pub au_settings: Option<Vec<String>>,
    pub active_character_ids: Option<Vec<DbId>>,
    pub tone: Option<serde_json::Value>,
    pub custom_characters: Option<Vec<CharacterUpsert>>,
    pub foreshadows: Option<Vec<CreateForeshadow>>,
}
