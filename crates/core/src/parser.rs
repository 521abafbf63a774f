//! Heuristic character-text parser.
//!
//! Converts an unstructured block of pasted text (typically a wiki excerpt)
//! into a partially-filled character draft: name plus personality,
//! appearance, and ability lists. Single forward pass over the lines, no
//! backtracking, and it cannot fail -- unrecognized input just lands in the
//! default personality bucket. Callers must validate the draft (non-empty
//! name) before persisting it.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Patterns and constants
// ---------------------------------------------------------------------------

/// Editorial marker appended to wiki section headers ("외모[편집]").
const EDIT_MARKER: &str = "[편집]";

/// Cleaned first lines at or above this many characters are not taken as a name.
const MAX_NAME_CHARS: usize = 20;

/// Bracket-enclosed citation/editor annotations: `[1]`, `[편집]`, `[주 3]`.
static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid regex"));

/// Numbered header prefix: `1.`, `12.`.
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.").expect("valid regex"));

/// Wiki header shape: optional `2.1.` numbering, the header text itself,
/// optional trailing edit marker. Group 3 captures the text.
static HEADER_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(\.\d+)*\.?)?\s*(.*?)\s*(\[편집\])?$").expect("valid regex")
});

/// Header keywords selecting the appearance section.
const APPEARANCE_KEYWORDS: &[&str] = &["외모"];

/// Header keywords selecting the abilities section.
const ABILITY_KEYWORDS: &[&str] = &["능력", "강점", "기술"];

/// Header keywords selecting the personality/description section. History
/// and relationship headers ("행적", "과거", "관계") route here too.
const PERSONALITY_KEYWORDS: &[&str] = &[
    "성격", "특징", "인물", "개요", "취향", "여담", "기타", "행적", "과거", "관계",
];

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A relationship entry on a character draft.
///
/// The parser never produces these; the field exists so a draft is shaped
/// like a full character record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub target_character_id: Option<DbId>,
    pub description: String,
}

/// A character draft produced from pasted free text.
///
/// All list fields are present even when empty; `speech_patterns` and
/// `relationships` are always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCharacter {
    pub name: String,
    pub personality: Vec<String>,
    pub appearance: Vec<String>,
    pub abilities: Vec<String>,
    pub speech_patterns: Vec<String>,
    pub relationships: Vec<Relationship>,
}

/// The section content lines are currently accumulating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Personality,
    Appearance,
    Abilities,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a pasted text block into a character draft.
///
/// Pure transformation: same input, same output, no I/O. The first usable
/// short line is always consumed as the name and never reconsidered, even
/// if later lines suggest it was a description -- best effort by intent.
pub fn parse_character_text(text: &str) -> ParsedCharacter {
    let mut parsed = ParsedCharacter::default();
    let mut section = Section::None;

    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    for (index, line) in lines.enumerate() {
        let cleaned = strip_citations(line);
        if cleaned.is_empty() {
            continue;
        }

        // First usable line: take it as the name unless it looks structural.
        if index == 0
            && !line.contains(EDIT_MARKER)
            && !NUMBERED_RE.is_match(line)
            && cleaned.chars().count() < MAX_NAME_CHARS
        {
            parsed.name = cleaned;
            continue;
        }

        // Inline labels: "외모: ..." switches the section and contributes
        // the remainder after the label. Takes priority over generic header
        // detection for the same line.
        if let Some((new_section, rest)) = split_inline_label(line, &cleaned) {
            section = new_section;
            if !rest.is_empty() {
                push_content(&mut parsed, section, rest);
            }
            continue;
        }

        // Section headers: edit marker, numbered prefix, or trailing colon.
        // A recognized header switches the section and is consumed; an
        // unrecognized one falls through and accumulates as content.
        if is_header(line) {
            if let Some(new_section) = section_for_header(line) {
                section = new_section;
                continue;
            }
        }

        // Plain content: accumulate into the active section, defaulting to
        // the personality/description bucket.
        push_content(&mut parsed, section, cleaned);
    }

    parsed
}

/// Remove bracket-enclosed annotations and trim the result.
fn strip_citations(line: &str) -> String {
    CITATION_RE.replace_all(line, "").trim().to_string()
}

/// Whether a raw line looks like a structural section header.
fn is_header(line: &str) -> bool {
    line.contains(EDIT_MARKER) || NUMBERED_RE.is_match(line) || line.ends_with(':')
}

/// Map a header line to a section via its keyword, if any.
fn section_for_header(line: &str) -> Option<Section> {
    // Extract "성격" from "2.1. 성격[편집]", then drop any leftover brackets.
    let header_text = HEADER_TEXT_RE
        .captures(line)
        .and_then(|c| c.get(3))
        .map(|m| m.as_str())
        .unwrap_or(line);
    let header_text = strip_citations(header_text);

    if APPEARANCE_KEYWORDS.iter().any(|k| header_text.contains(k)) {
        return Some(Section::Appearance);
    }
    if ABILITY_KEYWORDS.iter().any(|k| header_text.contains(k)) {
        return Some(Section::Abilities);
    }
    if PERSONALITY_KEYWORDS.iter().any(|k| header_text.contains(k)) {
        return Some(Section::Personality);
    }
    None
}

/// Detect an inline "label: content" line ("외모:", "능력 -", "성격:" ...).
///
/// Returns the section the label selects and the cleaned text after the
/// label. Checked against the raw line so a mid-label citation does not
/// create a label that was never typed.
fn split_inline_label(line: &str, cleaned: &str) -> Option<(Section, String)> {
    const LABELS: &[(&str, Section)] = &[
        ("외모", Section::Appearance),
        ("능력", Section::Abilities),
        ("성격", Section::Personality),
    ];

    for (label, section) in LABELS {
        for sep in [":", " -"] {
            let prefix = format!("{label}{sep}");
            if line.starts_with(&prefix) {
                let rest = cleaned
                    .strip_prefix(&prefix)
                    .unwrap_or(cleaned)
                    .trim()
                    .to_string();
                return Some((*section, rest));
            }
        }
    }
    None
}

/// Append one content item to the active section's list.
fn push_content(parsed: &mut ParsedCharacter, section: Section, content: String) {
    match section {
        Section::Appearance => parsed.appearance.push(content),
        Section::Abilities => parsed.abilities.push(content),
        // Description, history, and anything unclassified land here.
        Section::None | Section::Personality => parsed.personality.push(content),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- name extraction -----------------------------------------------------

    #[test]
    fn first_short_line_becomes_name() {
        let parsed = parse_character_text("탄지로\n외모: 붉은 머리\n능력: 후각");
        assert_eq!(parsed.name, "탄지로");
        assert_eq!(parsed.appearance, vec!["붉은 머리"]);
        assert_eq!(parsed.abilities, vec!["후각"]);
        assert!(parsed.personality.is_empty());
    }

    #[test]
    fn long_first_line_is_not_a_name() {
        let long_line = "이 캐릭터는 어느 날 갑자기 나타나서 모두를 놀라게 했다고 한다";
        let parsed = parse_character_text(long_line);
        assert!(parsed.name.is_empty());
        assert_eq!(parsed.personality, vec![long_line]);
    }

    #[test]
    fn header_first_line_is_not_a_name() {
        let parsed = parse_character_text("1. 인물 소개\n박문대");
        assert!(parsed.name.is_empty());
        // The header opens the personality section; the next line accumulates.
        assert_eq!(parsed.personality, vec!["박문대"]);
    }

    #[test]
    fn edit_marker_first_line_is_not_a_name() {
        let parsed = parse_character_text("개요[편집]\n냉철하고 계산적이다");
        assert!(parsed.name.is_empty());
        assert_eq!(parsed.personality, vec!["냉철하고 계산적이다"]);
    }

    #[test]
    fn leading_blank_lines_do_not_shift_the_name_slot() {
        let parsed = parse_character_text("\n\n네즈코\n오빠를 지킨다");
        assert_eq!(parsed.name, "네즈코");
        assert_eq!(parsed.personality, vec!["오빠를 지킨다"]);
    }

    // -- section headers -----------------------------------------------------

    #[test]
    fn numbered_wiki_headers_route_sections() {
        let text = "박문대\n1. 개요[편집]\n데뷔를 노리는 아이돌\n2. 외모[편집]\n강아지상\n3. 능력[편집]\n노래";
        let parsed = parse_character_text(text);
        assert_eq!(parsed.name, "박문대");
        assert_eq!(parsed.personality, vec!["데뷔를 노리는 아이돌"]);
        assert_eq!(parsed.appearance, vec!["강아지상"]);
        assert_eq!(parsed.abilities, vec!["노래"]);
    }

    #[test]
    fn colon_terminated_header_switches_section() {
        let parsed = parse_character_text("젠이츠\n능력:\n번개의 호흡\n청각");
        assert_eq!(parsed.abilities, vec!["번개의 호흡", "청각"]);
    }

    #[test]
    fn mid_line_edit_marker_is_stripped_before_classification() {
        // "인물 소개[편집]" must classify via the "인물" keyword after the
        // bracket content is removed.
        let parsed = parse_character_text("해리 포터\n2. 외모[편집]\n검은 머리\n인물 소개[편집]\n용감하다");
        assert_eq!(parsed.appearance, vec!["검은 머리"]);
        assert_eq!(parsed.personality, vec!["용감하다"]);
    }

    #[test]
    fn history_and_relationship_headers_route_to_personality() {
        let text = "론\n외모:\n빨간 머리\n4. 과거[편집]\n가난한 집에서 자랐다";
        let parsed = parse_character_text(text);
        assert_eq!(parsed.appearance, vec!["빨간 머리"]);
        assert_eq!(parsed.personality, vec!["가난한 집에서 자랐다"]);
    }

    #[test]
    fn unrecognized_header_keeps_section_and_accumulates() {
        // Matches the source behavior: an unknown header is kept as content
        // in whatever section is active.
        let parsed = parse_character_text("탄지로\n외모:\n붉은 머리\n5. 명대사:\n힘내자!");
        assert_eq!(parsed.appearance, vec!["붉은 머리", "5. 명대사:", "힘내자!"]);
    }

    // -- inline labels -------------------------------------------------------

    #[test]
    fn inline_label_contributes_remainder() {
        let parsed = parse_character_text("헤르미온느\n성격: 똑똑함\n규칙을 잘 지킨다");
        assert_eq!(parsed.personality, vec!["똑똑함", "규칙을 잘 지킨다"]);
    }

    #[test]
    fn dash_label_variant_contributes_remainder() {
        let parsed = parse_character_text("네즈코 - 잘못 찍힘\n외모 - 대나무 재갈");
        assert_eq!(parsed.appearance, vec!["대나무 재갈"]);
    }

    #[test]
    fn bare_label_switches_without_empty_item() {
        let parsed = parse_character_text("탄지로\n외모:\n붉은 머리");
        assert_eq!(parsed.appearance, vec!["붉은 머리"]);
    }

    // -- accumulation and citations ------------------------------------------

    #[test]
    fn unlabeled_text_accumulates_into_personality_in_order() {
        let text = "박문대\n냉철하고 계산적이다\n츤데레 같은 면이 있다\n심리전에 능하다";
        let parsed = parse_character_text(text);
        assert_eq!(
            parsed.personality,
            vec!["냉철하고 계산적이다", "츤데레 같은 면이 있다", "심리전에 능하다"]
        );
        assert!(parsed.appearance.is_empty());
        assert!(parsed.abilities.is_empty());
    }

    #[test]
    fn citations_are_stripped_from_content() {
        let parsed = parse_character_text("탄지로\n다정하다[1]\n포기하지 않는다[주 2]");
        assert_eq!(parsed.personality, vec!["다정하다", "포기하지 않는다"]);
    }

    #[test]
    fn citation_only_line_is_skipped() {
        let parsed = parse_character_text("탄지로\n[편집]\n다정하다");
        assert_eq!(parsed.personality, vec!["다정하다"]);
    }

    #[test]
    fn empty_input_yields_empty_draft() {
        let parsed = parse_character_text("");
        assert_eq!(parsed, ParsedCharacter::default());
    }

    #[test]
    fn fixed_empty_fields_stay_empty() {
        let parsed = parse_character_text("탄지로\n외모: 붉은 머리");
        assert!(parsed.speech_patterns.is_empty());
        assert!(parsed.relationships.is_empty());
    }

    // -- purity --------------------------------------------------------------

    #[test]
    fn parsing_is_idempotent() {
        let text = "젠이츠\n1. 개요[편집]\n겁쟁이\n외모: 노란 머리\n능력:\n번개의 호흡";
        let first = parse_character_text(text);
        let second = parse_character_text(text);
        assert_eq!(first, second);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(parse_character_text("탄지로")).unwrap();
        assert!(json.get("speechPatterns").is_some());
        assert!(json.get("relationships").is_some());
    }
}
