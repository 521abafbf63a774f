//! Tone profile value object.
//!
//! A bundle of stylistic parameters applied when assembling a prompt. Not
//! independently persisted -- projects store it as a JSONB column, so the
//! deserialization path must tolerate partial or missing data from older
//! rows.

use serde::{Deserialize, Serialize};

use crate::catalog::validate_rating;
use crate::error::CoreError;

/// Writing style used when no explicit tone has been configured.
pub const DEFAULT_WRITING_STYLE: &str = "Normal";

/// Stylistic parameters for prompt assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ToneProfile {
    /// Writing style label (문체). `"Normal"` means unset.
    pub writing_style: String,
    /// Atmosphere label (분위기).
    pub atmosphere: String,
    /// Pacing label (템포).
    pub pacing: String,
    /// Dialogue ratio percentage, 0-100 (대사 비중).
    pub dialogue_ratio: i32,
    /// Content rating: one of `All`, `15+`, `19+`.
    pub rating: String,
}

impl Default for ToneProfile {
    fn default() -> Self {
        Self {
            writing_style: DEFAULT_WRITING_STYLE.to_string(),
            atmosphere: String::new(),
            pacing: String::new(),
            dialogue_ratio: 0,
            rating: "All".to_string(),
        }
    }
}

impl ToneProfile {
    /// Whether any style has been configured beyond the defaults.
    pub fn is_configured(&self) -> bool {
        !self.writing_style.is_empty() && self.writing_style != DEFAULT_WRITING_STYLE
    }

    /// Validate the dialogue ratio range and the rating value.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(0..=100).contains(&self.dialogue_ratio) {
            return Err(CoreError::Validation(format!(
                "Dialogue ratio must be between 0 and 100 (got {})",
                self.dialogue_ratio
            )));
        }
        validate_rating(&self.rating)
    }

    /// Deserialize a tone profile from a stored JSONB value.
    ///
    /// Missing or malformed fields fall back to defaults rather than
    /// failing the read path.
    pub fn from_value(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_is_unconfigured() {
        let tone = ToneProfile::default();
        assert!(!tone.is_configured());
        assert_eq!(tone.rating, "All");
    }

    #[test]
    fn configured_when_style_set() {
        let tone = ToneProfile {
            writing_style: "담백체".to_string(),
            ..Default::default()
        };
        assert!(tone.is_configured());
    }

    #[test]
    fn validate_accepts_ratio_bounds() {
        let mut tone = ToneProfile::default();
        tone.dialogue_ratio = 0;
        assert!(tone.validate().is_ok());
        tone.dialogue_ratio = 100;
        assert!(tone.validate().is_ok());
    }

    #[test]
    fn validate_rejects_ratio_out_of_range() {
        let mut tone = ToneProfile::default();
        tone.dialogue_ratio = 101;
        let err = tone.validate().unwrap_err();
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn validate_rejects_unknown_rating() {
        let mut tone = ToneProfile::default();
        tone.rating = "R".to_string();
        assert!(tone.validate().is_err());
    }

    #[test]
    fn from_value_reads_camel_case() {
        let value = json!({
            "writingStyle": "만연체",
            "atmosphere": "잔잔함",
            "pacing": "느림",
            "dialogueRatio": 40,
            "rating": "15+"
        });
        let tone = ToneProfile::from_value(&value);
        assert_eq!(tone.writing_style, "만연체");
        assert_eq!(tone.dialogue_ratio, 40);
    }

    #[test]
    fn from_value_tolerates_partial_json() {
        let tone = ToneProfile::from_value(&json!({ "atmosphere": "어두움" }));
        assert_eq!(tone.atmosphere, "어두움");
        assert_eq!(tone.writing_style, DEFAULT_WRITING_STYLE);
    }

    #[test]
    fn from_value_tolerates_garbage() {
        let tone = ToneProfile::from_value(&json!("not an object"));
        assert_eq!(tone, ToneProfile::default());
    }
}
