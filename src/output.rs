//! Hand-off to the widget rendering library
//!
//! The host creates the widget from `{layout, name, uses_remote_storage}`,
//! or from bare markup when it only needs the layout.

use serde::Serialize;

use crate::config::WidgetConfig;

/// How the result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Raw layout markup
    #[default]
    Markup,
    /// Widget creation request as JSON
    Json,
}

/// Arguments for the library's widget constructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetRequest {
    pub layout: String,
    pub name: String,
    pub uses_remote_storage: bool,
}

impl WidgetRequest {
    pub fn new(layout: String, widget: &WidgetConfig) -> Self {
        Self {
            layout,
            name: widget.name.clone(),
            uses_remote_storage: widget.uses_remote_storage,
        }
    }
}

/// Text written to stdout for `format`
pub fn format_output(request: &WidgetRequest, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Markup => Ok(request.layout.clone()),
        OutputFormat::Json => serde_json::to_string_pretty(request),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
