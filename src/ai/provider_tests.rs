//! Tests for provider construction and error formatting

use super::*;
use crate::config::ai_types::{AnthropicConfig, OpenAiConfig};

fn anthropic_config(api_key: Option<&str>, model: Option<&str>) -> AiConfig {
    AiConfig {
        provider: AiProviderType::Anthropic,
        anthropic: AnthropicConfig {
            api_key: api_key.map(str::to_string),
            model: model.map(str::to_string),
            max_tokens: 512,
        },
        openai: OpenAiConfig::default(),
    }
}

fn openai_config(base_url: Option<&str>) -> AiConfig {
    AiConfig {
        provider: AiProviderType::OpenAi,
        anthropic: AnthropicConfig::default(),
        openai: OpenAiConfig {
            api_key: Some("sk-test".to_string()),
            model: Some("gpt-4o-mini".to_string()),
            base_url: base_url.map(str::to_string),
        },
    }
}

#[test]
fn test_from_config_anthropic() {
    let provider = AiProvider::from_config(&anthropic_config(Some("key"), Some("claude"))).unwrap();
    assert!(matches!(provider, AiProvider::Anthropic(_)));
    assert_eq!(provider.provider_name(), "Anthropic");
}

#[test]
fn test_from_config_missing_api_key() {
    let err = AiProvider::from_config(&anthropic_config(None, Some("claude"))).unwrap_err();
    match err {
        AiError::NotConfigured { provider, message } => {
            assert_eq!(provider, "Anthropic");
            assert!(message.contains("api_key"));
            assert!(message.contains("[ai.anthropic]"));
        }
        other => panic!("Expected NotConfigured, got {:?}", other),
    }
}

#[test]
fn test_from_config_blank_model() {
    let err = AiProvider::from_config(&anthropic_config(Some("key"), Some("   "))).unwrap_err();
    assert!(err.to_string().contains("model"));
}

#[test]
fn test_from_config_openai_default_base_url() {
    let provider = AiProvider::from_config(&openai_config(None)).unwrap();
    match provider {
        AiProvider::OpenAi(client) => {
            assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions")
        }
        other => panic!("Expected OpenAi, got {:?}", other),
    }
}

#[test]
fn test_from_config_openai_custom_base_url() {
    let provider = AiProvider::from_config(&openai_config(Some("http://localhost:8080/v1"))).unwrap();
    match provider {
        AiProvider::OpenAi(client) => {
            assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions")
        }
        other => panic!("Expected OpenAi, got {:?}", other),
    }
}

#[test]
fn test_ai_error_display() {
    let err = AiError::NotConfigured {
        provider: "Anthropic".to_string(),
        message: "test message".to_string(),
    };
    assert_eq!(format!("{}", err), "[Anthropic] AI not configured: test message");

    let err = AiError::Network {
        provider: "OpenAI".to_string(),
        message: "connection failed".to_string(),
    };
    assert_eq!(format!("{}", err), "[OpenAI] Network error: connection failed");

    let err = AiError::Api {
        provider: "Anthropic".to_string(),
        code: 429,
        message: "rate limited".to_string(),
    };
    assert_eq!(format!("{}", err), "[Anthropic] API error (429): rate limited");

    let err = AiError::Parse {
        provider: "Anthropic".to_string(),
        message: "invalid json".to_string(),
    };
    assert_eq!(format!("{}", err), "[Anthropic] Parse error: invalid json");
}
