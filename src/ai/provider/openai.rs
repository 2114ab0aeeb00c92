//! OpenAI-compatible Chat Completions client

use reqwest::Client;

use super::{AiError, parse_error, post_json};
use crate::ai::GenerateRequest;

const PROVIDER: &str = "OpenAI";

/// Chat Completions client; `base_url` may point at any compatible server
#[derive(Debug)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full endpoint URL, tolerant of a trailing slash on the base
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub fn build_request_body(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": request.system_prompt
                },
                {
                    "role": "user",
                    "content": request.user_content()
                }
            ]
        });

        serde_json::to_string(&body).map_err(|e| parse_error(PROVIDER, e.to_string()))
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let body = self.build_request_body(request)?;

        let builder = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.api_key));

        let response = post_json(PROVIDER, builder, body).await?;
        extract_text(&response)
    }
}

/// `choices[0].message.content` from a Chat Completions response body
pub(crate) fn extract_text(body: &str) -> Result<String, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| parse_error(PROVIDER, e.to_string()))?;

    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .filter(|text| !text.is_empty())
        .map(|text| text.to_string())
        .ok_or_else(|| parse_error(PROVIDER, "response contained no message content"))
}

#[cfg(test)]
#[path = "openai_tests.rs"]
mod openai_tests;
