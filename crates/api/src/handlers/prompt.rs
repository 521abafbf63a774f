//! Handler for prompt assembly: `POST /projects/{id}/prompt`.
//!
//! Loads the fully resolved project graph and hands it to the pure
//! assembler in `novelmind_core::prompt`. Missing pieces (no original work,
//! no characters) surface as fallback text inside the prompt, never as
//! errors -- the only hard failure here is an unknown project id.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use novelmind_core::error::CoreError;
use novelmind_core::prompt::{
    assemble, OriginalInfo, PromptCharacter, PromptContext, PromptRule, PromptStyle,
};
use novelmind_core::tone::ToneProfile;
use novelmind_core::types::DbId;
use novelmind_db::models::character::Character;
use novelmind_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for prompt generation.
#[derive(Debug, Deserialize)]
pub struct GeneratePrompt {
    /// Free-text scene context (현재 줄거리 / 직전 장면).
    pub context: Option<String>,
    /// Character ids for the scene. Defaults to the project's active set;
    /// an empty or stale selection falls back to all known characters.
    pub character_ids: Option<Vec<DbId>>,
    /// Rendering style: `"ideas"` (default) or `"draft"`.
    pub style: Option<String>,
}

/// Response body for prompt generation.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// POST /api/v1/projects/{id}/prompt
pub async fn generate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<GeneratePrompt>,
) -> AppResult<Json<PromptResponse>> {
    let detail = ProjectRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let original = detail.original_work.as_ref().map(|work| OriginalInfo {
        title: work.work.title.clone(),
        media_type: work.work.media_type.clone(),
    });

    // Canon characters from the original work, then the project's own.
    let mut characters: Vec<PromptCharacter> = Vec::new();
    if let Some(work) = &detail.original_work {
        characters.extend(work.canon_characters.iter().map(to_prompt_character));
    }
    characters.extend(detail.custom_characters.iter().map(to_prompt_character));

    let world_rules = detail
        .original_work
        .as_ref()
        .map(|work| {
            work.world_rules
                .iter()
                .map(|rule| PromptRule {
                    title: rule.title.clone(),
                    description: rule.description.clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    let ctx = PromptContext {
        original,
        timeline_setting: detail.project.timeline_setting.clone(),
        au_settings: detail.project.au_settings.clone(),
        tone: ToneProfile::from_value(&detail.project.tone),
        world_rules,
        characters,
        selected_ids: input
            .character_ids
            .unwrap_or_else(|| detail.project.active_character_ids.clone()),
        scene_context: input.context.unwrap_or_default(),
    };

    let style = PromptStyle::parse(input.style.as_deref());
    Ok(Json(PromptResponse {
        prompt: assemble(&ctx, style),
    }))
}

fn to_prompt_character(character: &Character) -> PromptCharacter {
    PromptCharacter {
        id: character.id,
        name: character.name.clone(),
        is_canon: character.is_canon,
        description: character.description.clone(),
        personality: character.personality.clone(),
        appearance: character.appearance.clone(),
        abilities: character.abilities.clone(),
        speech_patterns: character.speech_patterns.clone(),
        relationships: relationship_descriptions(&character.relationships),
    }
}

/// Pull the display strings out of the relationships JSONB array; entries
/// without a description are skipped.
fn relationship_descriptions(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("description"))
                .filter_map(|d| d.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
