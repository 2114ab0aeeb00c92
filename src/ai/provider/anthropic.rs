//! Anthropic Claude API client
//!
//! Single non-streaming request against the Messages API.

use reqwest::Client;

use super::{AiError, parse_error, post_json};
use crate::ai::GenerateRequest;

/// Anthropic API endpoint
const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Anthropic API version header
const ANTHROPIC_VERSION: &str = "2023-06-01";

const PROVIDER: &str = "Anthropic";

/// Anthropic Claude API client
#[derive(Debug)]
pub struct AnthropicClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    pub fn new(api_key: String, model: String, max_tokens: u32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Serialize the Messages API request body
    pub fn build_request_body(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "system": request.system_prompt,
            "messages": [
                {
                    "role": "user",
                    "content": request.user_content()
                }
            ]
        });

        serde_json::to_string(&body).map_err(|e| parse_error(PROVIDER, e.to_string()))
    }

    /// Send the request and return the concatenated text blocks
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        let body = self.build_request_body(request)?;

        let builder = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);

        let response = post_json(PROVIDER, builder, body).await?;
        extract_text(&response)
    }
}

/// Extract the answer from a Messages API response body
///
/// `{"content":[{"type":"text","text":"..."}]}`; multiple text blocks are joined.
pub(crate) fn extract_text(body: &str) -> Result<String, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| parse_error(PROVIDER, e.to_string()))?;

    let blocks = json
        .get("content")
        .and_then(|c| c.as_array())
        .ok_or_else(|| parse_error(PROVIDER, "response has no content array"))?;

    let text: String = blocks
        .iter()
        .filter(|block| block.get("type").and_then(|t| t.as_str()) == Some("text"))
        .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(parse_error(PROVIDER, "response contained no text"));
    }

    Ok(text)
}

#[cfg(test)]
#[path = "anthropic_tests.rs"]
mod anthropic_tests;
