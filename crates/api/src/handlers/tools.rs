//! Handler for the character-text parser: `POST /tools/character-parse`.

use axum::Json;

use novelmind_core::parser::{parse_character_text, ParsedCharacter};

use crate::error::AppResult;

/// Request body for the parser.
#[derive(Debug, serde::Deserialize)]
pub struct ParseCharacterText {
    pub text: String,
}

/// POST /api/v1/tools/character-parse
///
/// Runs the heuristic parser over a pasted text block and returns the
/// character draft. Never fails; unrecognizable input just produces an
/// emptier draft. The draft is not persisted -- the client reviews it and
/// submits a character create with the (possibly corrected) fields.
pub async fn parse(Json(input): Json<ParseCharacterText>) -> AppResult<Json<ParsedCharacter>> {
    Ok(Json(parse_character_text(&input.text)))
}
