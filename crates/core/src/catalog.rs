//! Enumerated string domains and field validation.
//!
//! Media types, provenance sources, foreshadow statuses, note types, and
//! content ratings are stored as TEXT and validated against the constant
//! tables below. Lives in `core` (zero internal deps) so both the
//! repository layer and the API handlers can validate before writing.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Media types
// ---------------------------------------------------------------------------

/// All valid media types for an original work.
pub const VALID_MEDIA_TYPES: &[&str] = &[
    "Anime", "Drama", "Game", "Novel", "Idol", "Webtoon", "Other",
];

// ---------------------------------------------------------------------------
// Provenance sources
// ---------------------------------------------------------------------------

pub const SOURCE_PRESET: &str = "Preset";
pub const SOURCE_CUSTOM: &str = "Custom";

/// All valid provenance tags for an original work.
pub const VALID_SOURCES: &[&str] = &[SOURCE_PRESET, SOURCE_CUSTOM];

// ---------------------------------------------------------------------------
// Foreshadow statuses
// ---------------------------------------------------------------------------

/// All valid lifecycle statuses for a foreshadow.
pub const VALID_FORESHADOW_STATUSES: &[&str] =
    &["Pending", "InProgress", "Resolved", "Dropped"];

/// Status assigned to a foreshadow created without one.
pub const DEFAULT_FORESHADOW_STATUS: &str = "Pending";

// ---------------------------------------------------------------------------
// Episode note types
// ---------------------------------------------------------------------------

/// All valid type tags for an episode note.
pub const VALID_NOTE_TYPES: &[&str] = &["General", "Dialogue", "Plot", "Draft"];

/// Type assigned to a note created without one.
pub const DEFAULT_NOTE_TYPE: &str = "General";

// ---------------------------------------------------------------------------
// Content ratings
// ---------------------------------------------------------------------------

/// All valid content ratings for a tone profile.
pub const VALID_RATINGS: &[&str] = &["All", "15+", "19+"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Maximum length for titles and character names in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validate a media type against the known set.
pub fn validate_media_type(media_type: &str) -> Result<(), CoreError> {
    if !VALID_MEDIA_TYPES.contains(&media_type) {
        return Err(CoreError::Validation(format!(
            "Invalid media type '{}'. Valid media types: {}",
            media_type,
            VALID_MEDIA_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Validate a provenance source against the known set.
pub fn validate_source(source: &str) -> Result<(), CoreError> {
    if !VALID_SOURCES.contains(&source) {
        return Err(CoreError::Validation(format!(
            "Invalid source '{}'. Valid sources: {}",
            source,
            VALID_SOURCES.join(", ")
        )));
    }
    Ok(())
}

/// Validate a foreshadow status against the known set.
pub fn validate_foreshadow_status(status: &str) -> Result<(), CoreError> {
    if !VALID_FORESHADOW_STATUSES.contains(&status) {
        return Err(CoreError::Validation(format!(
            "Invalid foreshadow status '{}'. Valid statuses: {}",
            status,
            VALID_FORESHADOW_STATUSES.join(", ")
        )));
    }
    Ok(())
}

/// Validate an episode note type against the known set.
pub fn validate_note_type(note_type: &str) -> Result<(), CoreError> {
    if !VALID_NOTE_TYPES.contains(&note_type) {
        return Err(CoreError::Validation(format!(
            "Invalid note type '{}'. Valid types: {}",
            note_type,
            VALID_NOTE_TYPES.join(", ")
        )));
    }
    Ok(())
}

/// Validate a content rating against the known set.
pub fn validate_rating(rating: &str) -> Result<(), CoreError> {
    if !VALID_RATINGS.contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Invalid rating '{}'. Valid ratings: {}",
            rating,
            VALID_RATINGS.join(", ")
        )));
    }
    Ok(())
}

/// Validate a work/project/episode title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a character name (non-empty, <= 200 chars).
///
/// Callers persisting a parsed draft must run this before accepting it --
/// the parser itself never rejects a nameless result.
pub fn validate_character_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Character name must not be empty".into(),
        ));
    }
    if name.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Character name must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
