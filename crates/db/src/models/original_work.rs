//! Original work entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use novelmind_core::types::{DbId, Timestamp};

use crate::models::character::{Character, CharacterUpsert, CreateCharacter};
use crate::models::world_rule::{CreateWorldRule, WorldRule};

/// An original work row from the `original_works` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OriginalWork {
    pub id: DbId,
    pub title: String,
    /// One of the valid media types (Anime, Drama, Game, ...).
    pub media_type: String,
    /// Provenance tag: `Preset` (seeded) or `Custom` (user-created).
    pub source: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An original work with its canon characters and world rules.
#[derive(Debug, Clone, Serialize)]
pub struct OriginalWorkDetail {
    #[serde(flatten)]
    pub work: OriginalWork,
    pub canon_characters: Vec<Character>,
    pub world_rules: Vec<WorldRule>,
}

/// DTO for creating a new original work, optionally with initial canon
/// characters and world rules in the same request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOriginalWork {
    pub title: String,
    pub media_type: String,
    #[serde(default)]
    pub canon_characters: Vec<CreateCharacter>,
    #[serde(default)]
    pub world_rules: Vec<CreateWorldRule>,
}

/// DTO for updating an original work.
///
/// `canon_characters` (when present) is synced against the existing rows:
/// ids are preserved for surviving characters, absent ids are deleted, new
/// items are inserted. `world_rules` (when present) is replaced wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOriginalWork {
    pub title: Option<String>,
    pub media_type: Option<String>,
    pub canon_characters: Option<Vec<CharacterUpsert>>,
    pub world_rules: Option<Vec<CreateWorldRule>>,
}
