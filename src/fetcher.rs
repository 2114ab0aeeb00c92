//! Cached layout fetcher
//!
//! Returns a layout decision from the cache when it is fresh, otherwise asks
//! the model once. Every failure on the way maps to the fixed fallback.

use thiserror::Error;

use crate::ai::extract::{ExtractError, parse_decision};
use crate::ai::prompt::build_request;
use crate::ai::{AiError, Generate};
use crate::cache::LayoutCache;
use crate::context::{ContextError, ContextSource};
use crate::layout::{ItemCatalog, LayoutDecision};

/// Why a fresh decision could not be produced
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Context unavailable: {0}")]
    Context(#[from] ContextError),

    #[error("Failed to serialize context: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Remote call failed: {0}")]
    Remote(#[from] AiError),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<ExtractError> for FetchError {
    fn from(err: ExtractError) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Where a decision came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionSource {
    Cache,
    Model,
    Fallback,
}

pub struct LayoutFetcher<C, G> {
    cache: LayoutCache,
    context: C,
    generator: G,
    catalog: ItemCatalog,
    preview: bool,
}

impl<C: ContextSource, G: Generate> LayoutFetcher<C, G> {
    pub fn new(cache: LayoutCache, context: C, generator: G) -> Self {
        Self {
            cache,
            context,
            generator,
            catalog: ItemCatalog::full(),
            preview: false,
        }
    }

    /// Restrict the items offered to the model and accepted back
    pub fn with_catalog(mut self, catalog: ItemCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Interactive preview always asks the model, skipping the cache read
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    pub fn context_source(&self) -> &C {
        &self.context
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Get a layout decision; never fails
    pub async fn fetch(&self) -> LayoutDecision {
        self.fetch_with_source().await.0
    }

    pub async fn fetch_with_source(&self) -> (LayoutDecision, DecisionSource) {
        if !self.preview
            && let Some(decision) = self.cache.read_fresh()
        {
            log::debug!("Using cached layout from {}", self.cache.path().display());
            return (decision, DecisionSource::Cache);
        }

        match self.fetch_fresh().await {
            Ok(decision) => {
                if let Err(e) = self.cache.write(&decision) {
                    log::warn!(
                        "Failed to write layout cache {}: {}",
                        self.cache.path().display(),
                        e
                    );
                }
                (decision, DecisionSource::Model)
            }
            Err(e) => {
                log::warn!("Layout request failed, using fallback: {}", e);
                (LayoutDecision::fallback(), DecisionSource::Fallback)
            }
        }
    }

    /// Gather context, ask the model once, parse and validate the answer
    async fn fetch_fresh(&self) -> Result<LayoutDecision, FetchError> {
        let context = self.context.gather().await?;
        let request = build_request(&context, &self.catalog)?;

        let raw = self.generator.generate(&request).await?;
        let decision = parse_decision(&raw)?;

        if !decision.has_recognized_items(&self.catalog) {
            return Err(FetchError::Malformed(format!(
                "no recognized widget items in layout {:?}",
                decision.layout
            )));
        }

        Ok(decision)
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod fetcher_tests;
