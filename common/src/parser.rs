//! Response body parsers
//!
//! The backend forwards model output, so bodies are usually clean JSON but
//! may arrive wrapped in a ```json code fence. Extraction is lenient;
//! typed parsing is strict.

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, ErrorBody, TranslationResult};

/// Extract the JSON payload from a response body.
///
/// Extraction order:
/// 1. ```json ... ``` fenced block
/// 2. outermost `{...}` object
/// 3. error
///
/// # Arguments
/// * `body` - raw response body
///
/// # Returns
/// * `Ok(&str)` - the extracted JSON slice
/// * `Err` - no JSON object found
pub fn extract_json(body: &str) -> Result<&str> {
    if let Some(start_marker) = body.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = body[start..].find("```") {
            let end = start + end_offset;
            return Ok(body[start..end].trim());
        }
    }

    if let Some(start) = body.find('{') {
        if let Some(end) = body.rfind('}') {
            if end >= start {
                return Ok(&body[start..=end]);
            }
        }
    }

    Err(Error::Parse("no JSON object found".into()))
}

/// Parse a 200 body from the analysis endpoint into an [`AnalysisResult`].
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(body)?;
    let result: AnalysisResult = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("analysis JSON parse error: {}", e)))?;
    Ok(result)
}

/// Parse a 200 body from the translation endpoint.
pub fn parse_translation_response(body: &str) -> Result<String> {
    let json_str = extract_json(body)?;
    let result: TranslationResult = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("translation JSON parse error: {}", e)))?;
    Ok(result.translation)
}

/// Parse a non-200 body into its `error` message.
pub fn parse_error_response(body: &str) -> Result<String> {
    let json_str = extract_json(body)?;
    let parsed: ErrorBody = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("error JSON parse error: {}", e)))?;
    Ok(parsed.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_plain_object() {
        let body = r#"{"disease_name": "Leaf Spot"}"#;
        let json = extract_json(body).unwrap();
        assert_eq!(json, body);
    }

    #[test]
    fn test_extract_json_fenced() {
        let body = "```json\n{\"disease_name\": \"Leaf Spot\"}\n```";
        let json = extract_json(body).unwrap();
        assert_eq!(json, "{\"disease_name\": \"Leaf Spot\"}");
    }

    #[test]
    fn test_extract_json_surrounding_prose() {
        let body = "Here is the result: {\"error\": \"bad image\"} -- end";
        let json = extract_json(body).unwrap();
        assert_eq!(json, "{\"error\": \"bad image\"}");
    }

    #[test]
    fn test_extract_json_none() {
        let result = extract_json("502 Bad Gateway");
        assert!(result.is_err());
    }

    // =============================================
    // typed parsers
    // =============================================

    #[test]
    fn test_parse_analysis_response_ok() {
        let body = r#"{
            "disease_name": "Early Blight",
            "confidence_score": 0.8734,
            "description": "<p>Fungal spots on lower leaves.</p>",
            "treatment_recommendation": "<h3>Treatment Steps</h3><ul><li>Remove affected leaves</li></ul>"
        }"#;
        let result = parse_analysis_response(body).unwrap();
        assert_eq!(result.disease_name, "Early Blight");
        assert_eq!(result.confidence_percent(), "87.34%");
    }

    #[test]
    fn test_parse_analysis_response_malformed() {
        // extraction succeeds, typed parsing rejects the field type
        let err = parse_analysis_response(r#"{"confidence_score": "high"}"#).unwrap_err();
        assert!(format!("{}", err).contains("analysis JSON parse error"));
    }

    #[test]
    fn test_parse_analysis_response_truncated() {
        // no closing brace, so extraction itself gives up
        let err = parse_analysis_response("{\"disease_name\": ").unwrap_err();
        assert!(format!("{}", err).contains("no JSON object found"));
    }

    #[test]
    fn test_parse_analysis_response_wrong_shape() {
        // A JSON body whose fields are all unknown still parses via defaults
        let result = parse_analysis_response(r#"{"unrelated": true}"#).unwrap();
        assert!(result.disease_name.is_empty());
    }

    #[test]
    fn test_parse_translation_response_ok() {
        let body = r#"{"translation": "ആദ്യ വരി\nരണ്ടാം വരി"}"#;
        let translation = parse_translation_response(body).unwrap();
        assert_eq!(translation, "ആദ്യ വരി\nരണ്ടാം വരി");
    }

    #[test]
    fn test_parse_error_response_ok() {
        let body = r#"{"error": "No text provided for translation"}"#;
        let message = parse_error_response(body).unwrap();
        assert_eq!(message, "No text provided for translation");
    }

    #[test]
    fn test_parse_error_response_html_body() {
        // Proxy error pages are not JSON; the caller falls back to the
        // transport error path
        let result = parse_error_response("<html><body>504</body></html>");
        assert!(result.is_err());
    }
}
