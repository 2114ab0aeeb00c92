//! LLM access
//!
//! The layout is chosen by a single `generate` call: a query, the widget
//! context as a JSON string, and a system prompt go in; raw text comes out.

pub mod extract;
pub mod prompt;
pub mod provider;

use std::future::Future;

use serde::Serialize;

pub use provider::{AiError, AiProvider};

/// One request to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub query: String,
    /// Widget context serialized as JSON
    pub context: String,
    pub system_prompt: String,
}

impl GenerateRequest {
    /// The user turn sent to chat-style APIs: query followed by the context
    pub fn user_content(&self) -> String {
        format!("{}\n\nContext:\n{}", self.query, self.context)
    }
}

/// Capability that turns a [`GenerateRequest`] into the model's raw answer
pub trait Generate {
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<String, AiError>> + Send;
}
