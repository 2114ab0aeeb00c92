//! Pull a layout decision out of free-form model output
//!
//! Models wrap JSON in prose or code fences. Everything before the first `{`
//! and after the last `}` is discarded and the remainder is parsed.

use crate::layout::LayoutDecision;

/// Errors from turning a raw answer into a [`LayoutDecision`]
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("response contains no JSON object")]
    NoJsonObject,

    #[error("response JSON is not a layout decision: {0}")]
    InvalidDecision(#[from] serde_json::Error),
}

/// The substring spanning the first `{` through the last `}`
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&raw[start..=end])
}

pub fn parse_decision(raw: &str) -> Result<LayoutDecision, ExtractError> {
    let json = extract_json_object(raw).ok_or(ExtractError::NoJsonObject)?;
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod extract_tests;
