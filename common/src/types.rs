//! Wire types for the diagnosis backend
//!
//! Shared between the web UI and the test suite:
//! - AnalysisResult: 200 body of POST /analyze
//! - TranslationResult: 200 body of POST /translate
//! - ErrorBody: non-200 body of either endpoint

use serde::{Deserialize, Serialize};

/// Sentinel disease name the backend returns for a plant with no findings.
pub const HEALTHY: &str = "Healthy";

/// Diagnosis returned by the analysis endpoint.
///
/// `description` and `treatment_recommendation` may carry HTML fragments
/// (the backend prompts the model for `<h3>`/`<p>`/`<ul>` formatting), so
/// they are rendered as markup and flattened before translation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub disease_name: String,

    /// Model confidence in [0, 1].
    pub confidence_score: f64,

    pub description: String,

    pub treatment_recommendation: String,
}

impl AnalysisResult {
    /// True when the backend reported no disease.
    pub fn is_healthy(&self) -> bool {
        self.disease_name == HEALTHY
    }

    /// Confidence as a display percentage with two decimals, e.g. "87.34%".
    pub fn confidence_percent(&self) -> String {
        format!("{:.2}%", self.confidence_score * 100.0)
    }
}

/// 200 body of the translation endpoint. The text keeps embedded newlines;
/// the UI turns them into line breaks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationResult {
    pub translation: String,
}

/// Non-200 body of either endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_healthy_sentinel() {
        let result = AnalysisResult {
            disease_name: "Healthy".to_string(),
            ..Default::default()
        };
        assert!(result.is_healthy());
    }

    #[test]
    fn test_is_healthy_case_sensitive() {
        let result = AnalysisResult {
            disease_name: "healthy".to_string(),
            ..Default::default()
        };
        assert!(!result.is_healthy());
    }

    #[test]
    fn test_confidence_percent_two_decimals() {
        let result = AnalysisResult {
            confidence_score: 0.8734,
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), "87.34%");
    }

    #[test]
    fn test_confidence_percent_bounds() {
        let zero = AnalysisResult::default();
        assert_eq!(zero.confidence_percent(), "0.00%");

        let full = AnalysisResult {
            confidence_score: 1.0,
            ..Default::default()
        };
        assert_eq!(full.confidence_percent(), "100.00%");
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let result = AnalysisResult {
            confidence_score: 0.87349,
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), "87.35%");
    }

    #[test]
    fn test_analysis_result_deserialize() {
        let json = r#"{
            "disease_name": "Powdery Mildew",
            "confidence_score": 0.92,
            "description": "<p>A fungal disease.</p>",
            "treatment_recommendation": "<h3>Treatment</h3><ul><li>Prune</li></ul>"
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.disease_name, "Powdery Mildew");
        assert!((result.confidence_score - 0.92).abs() < f64::EPSILON);
        assert!(!result.is_healthy());
    }

    #[test]
    fn test_analysis_result_missing_fields_default() {
        // A sparse body still deserializes; absent fields default
        let json = r#"{"disease_name": "Leaf Rust"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.disease_name, "Leaf Rust");
        assert_eq!(result.confidence_score, 0.0);
        assert!(result.description.is_empty());
    }

    #[test]
    fn test_translation_result_deserialize() {
        let json = r#"{"translation": "line one\nline two"}"#;
        let result: TranslationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.translation, "line one\nline two");
    }

    #[test]
    fn test_error_body_deserialize() {
        let json = r#"{"error": "No image file provided"}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error, "No image file provided");
    }
}
