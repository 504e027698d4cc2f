//! Single-model `generateContent` calls

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ProviderEndpoint;
use crate::error::{GenerationError, GenerationResult};
use crate::traits::CompletionClient;

/// Posts one prompt to `{base}/models/{id}:generateContent?key=...`
pub struct RealCompletionClient {
    client: reqwest::Client,
    endpoint: ProviderEndpoint,
}

impl RealCompletionClient {
    pub fn new(client: reqwest::Client, endpoint: ProviderEndpoint) -> Self {
        Self { client, endpoint }
    }
}

/// First text part of the first candidate, if any
fn first_text(body: &serde_json::Value) -> Option<&str> {
    body.get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(|text| text.as_str())
}

#[async_trait]
impl CompletionClient for RealCompletionClient {
    async fn complete(&self, model_id: &str, prompt: &str, timeout: Duration) -> GenerationResult<String> {
        if !self.endpoint.has_credential() {
            return Err(GenerationError::Configuration);
        }

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(self.endpoint.generate_url(model_id))
            .query(&[("key", self.endpoint.api_key.as_str())])
            .timeout(timeout)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status == 429 {
            return Err(GenerationError::QuotaExceeded);
        }
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream { status, body });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(format!("failed to read response: {e}")))?;

        first_text(&body)
            .map(str::to_string)
            .ok_or(GenerationError::EmptyCompletion)
    }
}
