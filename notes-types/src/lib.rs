//! Shared types for the notes service HTTP API and its clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /check-grammar`
///
/// `text` is optional at the type level so that a missing field reaches the
/// handler and is reported with the service's own error envelope.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckGrammarRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `POST /save-note`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SaveNoteRequest {
    #[serde(default)]
    pub markdown_text: Option<String>,
}

// =====================================================
// Response Types
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckGrammarResponse {
    pub corrections: Vec<CorrectionEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveNoteResponse {
    pub message: String,
    pub note_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListNotesResponse {
    pub notes: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderNoteResponse {
    pub html_content: String,
}

/// Envelope for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =====================================================
// Domain Types
// =====================================================

/// One grammar or style issue reported for a span of the checked text.
///
/// `offset` and `length` are as reported by the engine (UTF-16 code units
/// for LanguageTool).
/// The message is serialized as `error` to keep the wire format clients
/// already depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    #[serde(rename = "error")]
    pub message: String,
    pub suggestions: Vec<String>,
    pub offset: u64,
    pub length: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correction_entry_wire_names() {
        let entry = CorrectionEntry {
            message: "Possible typo".to_string(),
            suggestions: vec!["world".to_string(), "word".to_string()],
            offset: 6,
            length: 5,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["error"], "Possible typo");
        assert_eq!(json["suggestions"][1], "word");
        assert_eq!(json["offset"], 6);
        assert_eq!(json["length"], 5);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_requests_tolerate_missing_fields() {
        let req: SaveNoteRequest = serde_json::from_str("{}").unwrap();
        assert!(req.markdown_text.is_none());

        let req: CheckGrammarRequest = serde_json::from_str(r#"{"text": ""}"#).unwrap();
        assert_eq!(req.text.as_deref(), Some(""));
    }
}
