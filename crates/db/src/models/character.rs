//! Character entity model and DTOs.
//!
//! A character belongs to exactly one original work (canon) OR exactly one
//! project (custom), never both; the database enforces this with a CHECK
//! constraint. The owner id never appears in the DTOs -- repositories take
//! it from the call site so the exclusivity invariant cannot be bypassed by
//! a request body.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use novelmind_core::types::{DbId, Timestamp};

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub original_work_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub name: String,
    pub is_canon: bool,
    pub description: String,
    pub personality: Vec<String>,
    pub appearance: Vec<String>,
    pub abilities: Vec<String>,
    pub speech_patterns: Vec<String>,
    /// JSONB array of `{ "target_character_id", "description" }` objects.
    pub relationships: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character under an owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub description: Option<String>,
    pub personality: Option<Vec<String>>,
    pub appearance: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
    pub speech_patterns: Option<Vec<String>>,
    pub relationships: Option<serde_json::Value>,
}

/// DTO for updating an existing character. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub personality: Option<Vec<String>>,
    pub appearance: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
    pub speech_patterns: Option<Vec<String>>,
    pub relationships: Option<serde_json::Value>,
}

/// One item in a full-list character sync (owner-scoped PUT).
///
/// Items with an `id` update the existing row in place (the id survives);
/// items without one are inserted. Rows owned by the parent whose ids are
/// absent from the incoming list are deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterUpsert {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub personality: Option<Vec<String>>,
    pub appearance: Option<Vec<String>>,
    pub abilities: Option<Vec<String>>,
    pub speech_patterns: Option<Vec<String>>,
    pub relationships: Option<serde_json::Value>,
}

impl CharacterUpsert {
    /// The create-shaped view of this item, for the insert path of a sync.
    pub fn to_create(&self) -> CreateCharacter {
        CreateCharacter {
            name: self.name.clone(),
            description: self.description.clone(),
            personality: self.personality.clone(),
            appearance: self.appearance.clone(),
            abilities: self.abilities.clone(),
            speech_patterns: self.speech_patterns.clone(),
            relationships: self.relationships.clone(),
        }
    }
}
