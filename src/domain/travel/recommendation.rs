//! Recommendation output value objects.
//!
//! The [`RecommendationOutput`] is the terminal artifact of one
//! orchestration run. Its text is expected to carry six named sections;
//! the formatter enforces their presence.

use serde::{Deserialize, Serialize};

/// Section headers every complete recommendation must contain, in the
/// order the reasoning engine is instructed to produce them.
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "PRIMARY RECOMMENDATION",
    "ALTERNATIVES",
    "ENVIRONMENTAL IMPACT",
    "WEATHER CONSIDERATIONS",
    "AIR QUALITY CONSIDERATIONS",
    "PRACTICAL TIPS",
];

/// Final result of one recommendation run.
///
/// Always produced, never raised: failed runs carry `success = false`
/// and whatever text and tool data were gathered before the failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationOutput {
    /// Whether the run produced a complete, well-formed recommendation
    pub success: bool,

    /// The recommendation text (raw engine output, never fabricated)
    pub recommendation_text: String,

    /// Last result per tool, keyed by tool name
    pub raw_data: serde_json::Map<String, serde_json::Value>,
}

impl RecommendationOutput {
    /// Creates a successful output.
    pub fn complete(
        recommendation_text: impl Into<String>,
        raw_data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            success: true,
            recommendation_text: recommendation_text.into(),
            raw_data,
        }
    }

    /// Creates a failed output, preserving any text and data gathered.
    pub fn incomplete(
        recommendation_text: impl Into<String>,
        raw_data: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            success: false,
            recommendation_text: recommendation_text.into(),
            raw_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_sections_are_six() {
        assert_eq!(REQUIRED_SECTIONS.len(), 6);
        assert_eq!(REQUIRED_SECTIONS[0], "PRIMARY RECOMMENDATION");
        assert_eq!(REQUIRED_SECTIONS[5], "PRACTICAL TIPS");
    }

    #[test]
    fn complete_sets_success() {
        let output = RecommendationOutput::complete("text", serde_json::Map::new());
        assert!(output.success);
        assert_eq!(output.recommendation_text, "text");
    }

    #[test]
    fn incomplete_preserves_text_and_data() {
        let mut raw = serde_json::Map::new();
        raw.insert("weather_api".to_string(), serde_json::json!({"temp_c": 18.0}));

        let output = RecommendationOutput::incomplete("partial", raw);

        assert!(!output.success);
        assert_eq!(output.recommendation_text, "partial");
        assert!(output.raw_data.contains_key("weather_api"));
    }

    #[test]
    fn output_serializes_with_raw_data() {
        let mut raw = serde_json::Map::new();
        raw.insert("google_maps_directions".to_string(), serde_json::json!([]));

        let output = RecommendationOutput::complete("done", raw);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["success"], true);
        assert!(json["raw_data"]["google_maps_directions"].is_array());
    }
}
