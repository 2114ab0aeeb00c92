//! AI configuration types
//!
//! Settings for the LLM provider that chooses the widget layout.

use serde::Deserialize;

/// Default Anthropic output budget; a layout decision is a few dozen tokens
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default endpoint for OpenAI-compatible servers
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which provider backs the `generate` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProviderType {
    #[default]
    Anthropic,
    #[serde(alias = "open_ai")]
    OpenAi,
}

/// `[ai.anthropic]` section
#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        AnthropicConfig {
            api_key: None,
            model: None,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// `[ai.openai]` section
///
/// `base_url` lets any OpenAI-compatible server (local or hosted) stand in.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// `[ai]` section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AiConfig {
    #[serde(default)]
    pub provider: AiProviderType,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
