//! Analyze request/response records
//!
//! Both records are opaque pass-through payloads: the gateway never interprets
//! or rewrites a field, it only guarantees they round-trip as JSON with these
//! field names.

use serde::{Deserialize, Serialize};

/// Inbound analysis request, forwarded to the analysis service as-is.
///
/// Missing fields decode to their defaults; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Content to analyze
    #[serde(default)]
    pub text: String,

    /// Analysis model/profile selector (e.g. "openai", "deepseek", "ollama")
    #[serde(default)]
    pub model: String,

    /// Alternate model selector used by the ollama profile. Optional; omitted
    /// from the forwarded JSON when the caller did not send it, the analysis
    /// service decides precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama_model: Option<String>,
}

/// Analysis result relayed back to the caller.
///
/// `risk_level` is whatever the analysis service produced (e.g. "low",
/// "medium", "high"); the gateway does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub sensitive_words: Vec<String>,

    #[serde(default)]
    pub risk_level: String,

    #[serde(default)]
    pub risk_reason: String,

    /// Suggested replacement phrasings
    #[serde(default)]
    pub rewrite: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_fields_default() {
        let req: AnalyzeRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
        assert_eq!(req.model, "");
        assert!(req.ollama_model.is_none());

        let req: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
        assert_eq!(req.model, "");
    }

    #[test]
    fn test_request_unknown_fields_ignored() {
        let req: AnalyzeRequest =
            serde_json::from_str(r#"{"text":"hi","model":"openai","extra":42}"#).unwrap();
        assert_eq!(req.text, "hi");
        assert_eq!(req.model, "openai");
    }

    #[test]
    fn test_request_omits_absent_ollama_model() {
        let req = AnalyzeRequest {
            text: "hello".to_string(),
            model: "openai".to_string(),
            ollama_model: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("ollama_model").is_none());

        let req = AnalyzeRequest {
            ollama_model: Some("qwen:7b".to_string()),
            ..req
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["ollama_model"], "qwen:7b");
    }

    #[test]
    fn test_response_round_trip() {
        let raw = r#"{
            "sensitive_words": ["x"],
            "risk_level": "low",
            "risk_reason": "none",
            "rewrite": ["hello there"]
        }"#;
        let resp: AnalyzeResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.sensitive_words, vec!["x"]);
        assert_eq!(resp.risk_level, "low");

        let reencoded = serde_json::to_value(&resp).unwrap();
        let original: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(reencoded, original);
    }

    #[test]
    fn test_response_missing_fields_default() {
        let resp: AnalyzeResponse = serde_json::from_str(r#"{"risk_level":"high"}"#).unwrap();
        assert_eq!(resp.risk_level, "high");
        assert!(resp.sensitive_words.is_empty());
        assert!(resp.rewrite.is_empty());
        assert_eq!(resp.risk_reason, "");
    }
}
