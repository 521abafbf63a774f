//! Prompt assembly.
//!
//! Deterministically renders a project, its resolved original work, the
//! selected characters, and a free-text scene context into one formatted
//! string for pasting into an external AI chat tool. Pure string
//! templating: no state, no persistence, and the only failure mode is a
//! short-circuit message when the original work is missing.

use serde::{Deserialize, Serialize};

use crate::tone::ToneProfile;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// The original work fields the template needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalInfo {
    pub title: String,
    pub media_type: String,
}

/// One character as the template renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptCharacter {
    pub id: DbId,
    pub name: String,
    pub is_canon: bool,
    pub description: String,
    pub personality: Vec<String>,
    pub appearance: Vec<String>,
    pub abilities: Vec<String>,
    pub speech_patterns: Vec<String>,
    /// Relationship descriptions, already resolved to display strings.
    pub relationships: Vec<String>,
}

/// One world rule as the template renders it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRule {
    pub title: String,
    pub description: String,
}

/// Everything the assembler needs, resolved by the caller.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub original: Option<OriginalInfo>,
    pub timeline_setting: String,
    pub au_settings: Vec<String>,
    pub tone: ToneProfile,
    /// World rules from the original work.
    pub world_rules: Vec<PromptRule>,
    /// All known characters for the project (canon + custom).
    pub characters: Vec<PromptCharacter>,
    /// Character ids selected for the current scene. An empty (or entirely
    /// stale) selection falls back to all known characters.
    pub selected_ids: Vec<DbId>,
    /// Free-text scene context pasted by the writer.
    pub scene_context: String,
}

/// The two supported rendering styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStyle {
    /// Brainstorming partner: proposes three development ideas.
    #[default]
    Ideas,
    /// Ghost writer: drafts the scene continuation directly.
    Draft,
}

impl PromptStyle {
    /// Parse a style selector; unknown or missing values fall back to
    /// [`PromptStyle::Ideas`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("draft") => Self::Draft,
            _ => Self::Ideas,
        }
    }
}

/// Short-circuit message returned when the project has no original work.
pub const MISSING_ORIGINAL_MESSAGE: &str = "원작 정보를 찾을 수 없습니다.";

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Render the full prompt string.
///
/// Output is newline-separated sections with no length cap. Empty lists are
/// skipped; fallback sentences substitute when no characters or rules exist.
pub fn assemble(ctx: &PromptContext, style: PromptStyle) -> String {
    let Some(original) = &ctx.original else {
        return MISSING_ORIGINAL_MESSAGE.to_string();
    };

    let characters = select_characters(ctx);
    let char_block = if characters.is_empty() {
        format!(
            "(등록된 캐릭터가 없습니다. 원작 '{}'의 캐릭터 기본 성격을 참고해주세요.)",
            original.title
        )
    } else {
        characters
            .iter()
            .map(|c| describe_character(c))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let rules_block = if ctx.world_rules.is_empty() {
        "특별한 세계관 설정 없음".to_string()
    } else {
        ctx.world_rules
            .iter()
            .map(|r| format!("- {}: {}", r.title, r.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let au_desc = if ctx.au_settings.is_empty() {
        "없음".to_string()
    } else {
        ctx.au_settings.join(", ")
    };

    format!(
        "# 역할\n{role}\n\n\
         # 작품 설정\n\
         - 원작: {title}\n\
         - 매체: {media}\n\
         - 팬픽 시점(Timeline): {timeline}\n\
         - AU 설정: {au}\n\
         - 톤앤매너: {tone}\n\n\
         # 세계관 및 주요 설정\n{rules}\n\n\
         # 등장 캐릭터 (성격 및 말투 유지 필수)\n{characters}\n\n\
         # 현재 상황 (Context)\n{context}\n\
         (참고: 위 내용은 작가의 메모나 트위터 썰 형식일 수 있습니다. 문체보다는 담긴 상황과 감정에 집중해주세요.)\n\n\
         # 요청사항\n{request}",
        role = role_section(style),
        title = original.title,
        media = original.media_type,
        timeline = ctx.timeline_setting,
        au = au_desc,
        tone = describe_tone(&ctx.tone),
        rules = rules_block,
        characters = char_block,
        context = ctx.scene_context,
        request = request_section(style),
    )
}

/// Filter characters by the selection, falling back to all known characters
/// when the selection matches nothing.
fn select_characters(ctx: &PromptContext) -> Vec<&PromptCharacter> {
    let selected: Vec<&PromptCharacter> = ctx
        .characters
        .iter()
        .filter(|c| ctx.selected_ids.contains(&c.id))
        .collect();

    if selected.is_empty() {
        ctx.characters.iter().collect()
    } else {
        selected
    }
}

/// Render one character block, skipping empty fields.
fn describe_character(c: &PromptCharacter) -> String {
    let kind = if c.is_canon {
        "원작 캐릭터"
    } else {
        "오리지널 캐릭터"
    };
    let mut desc = format!("- {} ({kind})", c.name);

    if !c.description.is_empty() {
        desc.push_str(&format!("\n  * 설명: {}", c.description));
    }
    if !c.personality.is_empty() {
        desc.push_str(&format!("\n  * 성격: {}", c.personality.join(", ")));
    }
    if !c.appearance.is_empty() {
        desc.push_str(&format!("\n  * 외모: {}", c.appearance.join(", ")));
    }
    if !c.abilities.is_empty() {
        desc.push_str(&format!("\n  * 능력: {}", c.abilities.join(", ")));
    }
    if !c.speech_patterns.is_empty() {
        desc.push_str(&format!("\n  * 말투: {}", c.speech_patterns.join(", ")));
    }
    if !c.relationships.is_empty() {
        desc.push_str(&format!("\n  * 관계: {}", c.relationships.join(", ")));
    }

    desc
}

/// Render the tone line: a placeholder when unset, otherwise the configured
/// parameters with defaults skipped.
fn describe_tone(tone: &ToneProfile) -> String {
    if !tone.is_configured() {
        return "(미설정 - 현재 상황 텍스트의 분위기를 참고해주세요)".to_string();
    }

    let mut desc = format!("문체: {}, 분위기: {}", tone.writing_style, tone.atmosphere);
    if !tone.pacing.is_empty() {
        desc.push_str(&format!(", 템포: {}", tone.pacing));
    }
    if tone.dialogue_ratio > 0 {
        desc.push_str(&format!(", 대사 비중: {}%", tone.dialogue_ratio));
    }
    if tone.rating != "All" {
        desc.push_str(&format!(", 등급: {}", tone.rating));
    }
    desc
}

fn role_section(style: PromptStyle) -> &'static str {
    match style {
        PromptStyle::Ideas => {
            "당신은 작가의 아이디어 구상을 돕는 보조 작가(Brainstorming Partner)입니다.\n\
             원작의 설정과 캐릭터성을 완벽하게 이해하고 있으며, 작가가 던져준 거친 아이디어를 구체적인 에피소드나 장면으로 발전시키는 능력이 탁월합니다."
        }
        PromptStyle::Draft => {
            "당신은 작가의 구상을 바탕으로 장면 초안을 집필하는 보조 작가(Ghost Writer)입니다.\n\
             원작의 설정과 캐릭터성을 완벽하게 이해하고 있으며, 캐릭터가 무너지지 않는 자연스러운 장면을 써내는 능력이 탁월합니다."
        }
    }
}

fn request_section(style: PromptStyle) -> &'static str {
    match style {
        PromptStyle::Ideas => {
            "1. 위 상황에서 이어질 수 있는 흥미로운 전개 아이디어 3가지를 제안해주세요. (직접 소설을 쓰는 것이 아니라, '아이디어'를 제안하는 것입니다.)\n\
             2. 각 아이디어는 캐릭터의 성격(OOC 방지)을 철저히 지켜야 합니다.\n\
             3. 독자들이 좋아할 만한 '관계성'과 '감정선' 포인트가 무엇인지 짚어주세요.\n\
             4. 각 아이디어별로 핵심 대사(Key Dialogue)를 1~2줄 포함해주세요."
        }
        PromptStyle::Draft => {
            "1. 위 상황에서 자연스럽게 이어지는 장면 초안을 작성해주세요.\n\
             2. 각 캐릭터의 성격과 말투(OOC 방지)를 철저히 지켜주세요.\n\
             3. 대사와 지문의 비율은 톤앤매너 설정을 따라주세요.\n\
             4. 장면의 마지막은 다음 전개가 궁금해지는 지점에서 끊어주세요."
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
