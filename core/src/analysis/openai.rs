//! OpenAI-compatible vision provider (configurable base URL).

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, info};
use serde_json::Value;

use super::{AnalysisClient, AnalysisReport};
use crate::error::{CorpusError, Result};
use crate::request::AnalysisRequest;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions client that ships the preview image as a base64 data URL
pub struct OpenAiVisionClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiVisionClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_body(request: &AnalysisRequest) -> Value {
        let image_url = format!(
            "data:image/png;base64,{}",
            STANDARD.encode(&request.image_png)
        );
        serde_json::json!({
            "model": request.model,
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": request.prompt},
                    {"type": "image_url", "image_url": {"url": image_url}}
                ]
            }]
        })
    }

    fn parse_response(json: &Value) -> Result<AnalysisReport> {
        json.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(|s| AnalysisReport::new(s.trim()))
            .ok_or_else(|| {
                CorpusError::Analysis("missing choices[0].message.content".to_string())
            })
    }
}

#[async_trait]
impl AnalysisClient for OpenAiVisionClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        info!(
            "sending analysis request to {} (model {})",
            self.name(),
            request.model
        );

        // One attempt; the error carries transport/status detail only, never
        // the prompt or image payload.
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&Self::build_body(request))
            .send()
            .await
            .map_err(|e| CorpusError::Analysis(format!("provider unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorpusError::Analysis(format!(
                "provider returned status {}",
                status
            )));
        }

        let json: Value = response.json().await?;
        debug!("provider response parsed");
        Self::parse_response(&json)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            image_png: vec![1, 2, 3],
            prompt: "Describe the image.".to_string(),
            model: "gpt-4o".to_string(),
        }
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let client = OpenAiVisionClient::with_base_url("key", "https://example.test/v1/");
        assert_eq!(client.base_url, "https://example.test/v1");
        assert_eq!(client.name(), "openai");
    }

    #[test]
    fn test_body_embeds_data_url_and_prompt() {
        let body = OpenAiVisionClient::build_body(&request());
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["content"][0]["text"], "Describe the image.");

        let url = body["messages"][0]["content"][1]["image_url"]["url"]
            .as_str()
            .unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(url.trim_start_matches("data:image/png;base64,"), "AQID");
    }

    #[test]
    fn test_parse_response_extracts_content() {
        let json = serde_json::json!({
            "choices": [{"message": {"content": "  Findings: unremarkable.  "}}]
        });
        let report = OpenAiVisionClient::parse_response(&json).unwrap();
        assert_eq!(report.content(), "Findings: unremarkable.");
    }

    #[test]
    fn test_parse_response_missing_content_is_analysis_error() {
        let json = serde_json::json!({"choices": []});
        let err = OpenAiVisionClient::parse_response(&json).unwrap_err();
        assert!(matches!(err, CorpusError::Analysis(_)));
    }
}
