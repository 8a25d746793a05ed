//! Typed HTTP client for the LanguageTool server API.

use super::{GrammarChecker, GrammarError};
use async_trait::async_trait;
use notes_types::CorrectionEntry;
use serde::Deserialize;
use std::time::Duration;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

pub struct LanguageToolClient {
    base_url: String,
    language: String,
    timeout: Duration,
    client: reqwest::Client,
}

// ── LanguageTool API types ──────────────────────────

#[derive(Debug, Deserialize)]
struct LtCheckResponse {
    #[serde(default)]
    matches: Vec<LtMatch>,
}

#[derive(Debug, Deserialize)]
struct LtMatch {
    message: String,
    #[serde(default)]
    replacements: Vec<LtReplacement>,
    offset: u64,
    length: u64,
}

#[derive(Debug, Deserialize)]
struct LtReplacement {
    value: String,
}

impl From<LtMatch> for CorrectionEntry {
    fn from(m: LtMatch) -> Self {
        CorrectionEntry {
            message: m.message,
            suggestions: m.replacements.into_iter().map(|r| r.value).collect(),
            offset: m.offset,
            length: m.length,
        }
    }
}

// ── Client impl ─────────────────────────────────────

impl LanguageToolClient {
    pub fn new(base_url: &str, language: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            language: language.to_string(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn map_send_error(e: reqwest::Error) -> GrammarError {
        if e.is_timeout() {
            GrammarError::Timeout
        } else {
            GrammarError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<CorrectionEntry>, GrammarError> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let resp = self
            .client
            .post(format!("{}/v2/check", self.base_url))
            .form(&[("text", text), ("language", self.language.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                log::warn!("[GRAMMAR] Check request failed: {}", e);
                Self::map_send_error(e)
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            log::warn!("[GRAMMAR] Engine returned {}: {}", status, body);
            return Err(GrammarError::Status(status.as_u16(), body));
        }

        let parsed: LtCheckResponse = resp
            .json()
            .await
            .map_err(|e| GrammarError::Decode(e.to_string()))?;

        log::debug!(
            "[GRAMMAR] {} issue(s) in {} chars",
            parsed.matches.len(),
            text.chars().count()
        );

        Ok(parsed.matches.into_iter().map(CorrectionEntry::from).collect())
    }

    async fn health(&self) -> bool {
        match self
            .client
            .get(format!("{}/v2/languages", self.base_url))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                log::debug!("[GRAMMAR] Health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_string_contains, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> LanguageToolClient {
        LanguageToolClient::new(&server.uri(), "en-US", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_check_maps_matches_in_order() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "software": { "name": "LanguageTool" },
            "matches": [
                {
                    "message": "Possible spelling mistake found.",
                    "shortMessage": "Spelling mistake",
                    "replacements": [{ "value": "world" }, { "value": "word" }, { "value": "whirled" }],
                    "offset": 6,
                    "length": 5,
                    "rule": { "id": "MORFOLOGIK_RULE_EN_US" }
                },
                {
                    "message": "This sentence does not start with an uppercase letter.",
                    "replacements": [{ "value": "It" }],
                    "offset": 13,
                    "length": 2
                }
            ]
        });

        Mock::given(method("POST"))
            .and(path("/v2/check"))
            .and(body_string_contains("language=en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let corrections = client_for(&mock_server)
            .check("Hello wrold. it is")
            .await
            .unwrap();

        assert_eq!(corrections.len(), 2);
        assert_eq!(corrections[0].message, "Possible spelling mistake found.");
        assert_eq!(corrections[0].suggestions, vec!["world", "word", "whirled"]);
        assert_eq!((corrections[0].offset, corrections[0].length), (6, 5));
        assert_eq!(corrections[1].suggestions, vec!["It"]);
    }

    #[tokio::test]
    async fn test_check_no_matches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/check"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "matches": [] })))
            .mount(&mock_server)
            .await;

        let corrections = client_for(&mock_server).check("Fine text.").await.unwrap();
        assert!(corrections.is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_skips_engine() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;

        let corrections = client_for(&mock_server).check("").await.unwrap();
        assert!(corrections.is_empty());
    }

    #[tokio::test]
    async fn test_engine_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/check"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).check("text").await.unwrap_err();
        match err {
            GrammarError::Status(code, body) => {
                assert_eq!(code, 503);
                assert_eq!(body, "overloaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_engine_garbage_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/check"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).check("text").await.unwrap_err();
        assert!(matches!(err, GrammarError::Decode(_)));
    }

    #[tokio::test]
    async fn test_engine_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/check"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "matches": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = LanguageToolClient::new(&mock_server.uri(), "en-US", Duration::from_millis(100));
        let err = client.check("text").await.unwrap_err();
        assert!(matches!(err, GrammarError::Timeout));
    }

    #[tokio::test]
    async fn test_unreachable_engine() {
        // Nothing listens on port 9 on test machines
        let client = LanguageToolClient::new("http://127.0.0.1:9", "en-US", Duration::from_secs(2));
        let err = client.check("text").await.unwrap_err();
        assert!(matches!(err, GrammarError::Request(_) | GrammarError::Timeout));
        assert!(!client.health().await);
    }

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        assert!(client_for(&mock_server).health().await);
    }
}
