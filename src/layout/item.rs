//! Widget item vocabulary
//!
//! The fixed set of content blocks the rendering library knows how to draw.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One named content block rendered by the widget library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetItem {
    Date,
    Greeting,
    Events,
    Reminders,
    Current,
    Future,
    Forecast,
    Hourly,
    Battery,
    Sunrise,
    Week,
    News,
    Space,
}

impl WidgetItem {
    /// Every item, in the order they are offered to the model
    pub const ALL: [WidgetItem; 13] = [
        WidgetItem::Date,
        WidgetItem::Greeting,
        WidgetItem::Events,
        WidgetItem::Reminders,
        WidgetItem::Current,
        WidgetItem::Future,
        WidgetItem::Forecast,
        WidgetItem::Hourly,
        WidgetItem::Battery,
        WidgetItem::Sunrise,
        WidgetItem::Week,
        WidgetItem::News,
        WidgetItem::Space,
    ];

    /// The identifier used in layout markup and in the model's answer
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetItem::Date => "date",
            WidgetItem::Greeting => "greeting",
            WidgetItem::Events => "events",
            WidgetItem::Reminders => "reminders",
            WidgetItem::Current => "current",
            WidgetItem::Future => "future",
            WidgetItem::Forecast => "forecast",
            WidgetItem::Hourly => "hourly",
            WidgetItem::Battery => "battery",
            WidgetItem::Sunrise => "sunrise",
            WidgetItem::Week => "week",
            WidgetItem::News => "news",
            WidgetItem::Space => "space",
        }
    }

    /// Parse an item name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        WidgetItem::ALL
            .into_iter()
            .find(|item| item.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for WidgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The subset of items a particular rendering library build recognizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: HashSet<WidgetItem>,
}

impl ItemCatalog {
    /// Catalog containing the whole vocabulary
    pub fn full() -> Self {
        Self {
            items: WidgetItem::ALL.into_iter().collect(),
        }
    }

    pub fn from_items(items: impl IntoIterator<Item = WidgetItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn contains(&self, item: WidgetItem) -> bool {
        self.items.contains(&item)
    }

    /// Look up a raw name; `None` when the name is unknown or not in the catalog
    pub fn resolve(&self, name: &str) -> Option<WidgetItem> {
        WidgetItem::parse(name).filter(|item| self.contains(*item))
    }

    /// Item names in vocabulary order
    pub fn names(&self) -> Vec<&'static str> {
        WidgetItem::ALL
            .into_iter()
            .filter(|item| self.contains(*item))
            .map(|item| item.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod item_tests;
