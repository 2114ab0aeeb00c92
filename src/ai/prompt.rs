//! Prompt template for layout selection

use super::GenerateRequest;
use crate::context::WidgetContext;
use crate::layout::ItemCatalog;

/// System prompt shared by every provider
pub const SYSTEM_PROMPT: &str = "You design the layout of a small home-screen widget. \
You pick which content blocks to show and in what order so the most useful \
information for this moment comes first. You answer with a single JSON object and nothing else.";

/// Build the request sent to the model
///
/// The query enumerates the allowed item names and the exact output shape;
/// the context travels separately as compact JSON.
pub fn build_request(
    context: &WidgetContext,
    catalog: &ItemCatalog,
) -> Result<GenerateRequest, serde_json::Error> {
    Ok(GenerateRequest {
        query: build_query(catalog),
        context: context.to_prompt_json()?,
        system_prompt: SYSTEM_PROMPT.to_string(),
    })
}

pub fn build_query(catalog: &ItemCatalog) -> String {
    let items = catalog.names().join(", ");

    format!(
        "Choose the widget layout for the user's current situation described in the context.\n\
\n\
Allowed layout items: {items}\n\
\n\
Rules:\n\
- Use only the allowed item names, each on its own line, most important first.\n\
- Pick between 3 and 6 items.\n\
- Write a short, friendly message (at most 8 words) about the day.\n\
\n\
Respond with exactly this JSON shape:\n\
{{\"layout\": \"item1\\nitem2\\nitem3\", \"message\": \"short message\"}}"
    )
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
