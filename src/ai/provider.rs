//! AI provider abstraction
//!
//! Defines the AiProvider enum, AiError types, and factory for creating provider instances.

use thiserror::Error;

use super::{Generate, GenerateRequest};
use crate::config::ai_types::{AiConfig, AiProviderType, DEFAULT_OPENAI_BASE_URL};

mod anthropic;
mod openai;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

/// Errors that can occur during AI operations
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key or model)
    #[error("[{provider}] AI not configured: {message}")]
    NotConfigured { provider: String, message: String },

    /// Network error during API request
    #[error("[{provider}] Network error: {message}")]
    Network { provider: String, message: String },

    /// API returned an error response
    #[error("[{provider}] API error ({code}): {message}")]
    Api {
        provider: String,
        code: u16,
        message: String,
    },

    /// Failed to parse API response
    #[error("[{provider}] Parse error: {message}")]
    Parse { provider: String, message: String },
}

/// AI provider implementations
#[derive(Debug)]
pub enum AiProvider {
    /// Anthropic Messages API
    Anthropic(AnthropicClient),
    /// OpenAI Chat Completions API or any compatible server
    OpenAi(OpenAiClient),
}

impl AiProvider {
    /// Create an AI provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        match config.provider {
            AiProviderType::Anthropic => {
                let provider = "Anthropic";
                let api_key = required(provider, "api_key", "ai.anthropic", &config.anthropic.api_key)?;
                let model = required(provider, "model", "ai.anthropic", &config.anthropic.model)?;

                Ok(AiProvider::Anthropic(AnthropicClient::new(
                    api_key,
                    model,
                    config.anthropic.max_tokens,
                )))
            }
            AiProviderType::OpenAi => {
                let provider = "OpenAI";
                let api_key = required(provider, "api_key", "ai.openai", &config.openai.api_key)?;
                let model = required(provider, "model", "ai.openai", &config.openai.model)?;
                let base_url = config
                    .openai
                    .base_url
                    .as_ref()
                    .filter(|u| !u.trim().is_empty())
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

                Ok(AiProvider::OpenAi(OpenAiClient::new(api_key, model, base_url)))
            }
        }
    }

    /// Human-readable provider name for logs
    pub fn provider_name(&self) -> &'static str {
        match self {
            AiProvider::Anthropic(_) => "Anthropic",
            AiProvider::OpenAi(_) => "OpenAI",
        }
    }
}

impl Generate for AiProvider {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AiError> {
        match self {
            AiProvider::Anthropic(client) => client.generate(request).await,
            AiProvider::OpenAi(client) => client.generate(request).await,
        }
    }
}

/// Pull a non-blank string setting or explain which key is missing
fn required(
    provider: &str,
    key: &str,
    section: &str,
    value: &Option<String>,
) -> Result<String, AiError> {
    value
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .ok_or_else(|| AiError::NotConfigured {
            provider: provider.to_string(),
            message: format!("Missing or empty {} in [{}] config", key, section),
        })
}

/// Map a transport failure from reqwest
fn network_error(provider: &str, err: reqwest::Error) -> AiError {
    AiError::Network {
        provider: provider.to_string(),
        message: err.to_string(),
    }
}

fn parse_error(provider: &str, message: impl Into<String>) -> AiError {
    AiError::Parse {
        provider: provider.to_string(),
        message: message.into(),
    }
}

/// Send a JSON body and return the response text, mapping non-2xx to `Api`
async fn post_json(
    provider: &str,
    request: reqwest::RequestBuilder,
    body: String,
) -> Result<String, AiError> {
    let response = request
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| network_error(provider, e))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| network_error(provider, e))?;

    if !status.is_success() {
        return Err(AiError::Api {
            provider: provider.to_string(),
            code: status.as_u16(),
            message: text,
        });
    }

    Ok(text)
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
