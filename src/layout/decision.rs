use serde::{Deserialize, Serialize};

use super::item::{ItemCatalog, WidgetItem};

/// Layout used whenever the model cannot be reached or answers badly
pub const FALLBACK_LAYOUT: &str = "date\ncurrent\nevents\nreminders";

/// Message paired with [`FALLBACK_LAYOUT`]
pub const FALLBACK_MESSAGE: &str = "Have a great day!";

/// Which widget items to show, in order, plus a short display message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDecision {
    pub layout: String,
    pub message: String,
}

impl LayoutDecision {
    pub fn new(layout: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            message: message.into(),
        }
    }

    /// The fixed decision returned on any failure
    pub fn fallback() -> Self {
        Self::new(FALLBACK_LAYOUT, FALLBACK_MESSAGE)
    }

    /// Raw item names, trimmed, blank lines skipped
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.layout
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Recognized items in requested order
    ///
    /// Names that are unknown or outside the catalog are dropped.
    pub fn items(&self, catalog: &ItemCatalog) -> Vec<WidgetItem> {
        self.item_names()
            .filter_map(|name| {
                let item = catalog.resolve(name);
                if item.is_none() {
                    log::debug!("Dropping unrecognized widget item {:?}", name);
                }
                item
            })
            .collect()
    }

    /// True when at least one requested item is usable
    pub fn has_recognized_items(&self, catalog: &ItemCatalog) -> bool {
        self.item_names().any(|name| catalog.resolve(name).is_some())
    }
}

#[cfg(test)]
#[path = "decision_tests.rs"]
mod decision_tests;
