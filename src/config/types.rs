// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use super::ai_types::AiConfig;
use crate::layout::WidgetItem;
use crate::render::ColumnCount;

/// Default widget (script) name, also the cache file stem
pub const DEFAULT_WIDGET_NAME: &str = "smartcal";

/// Minutes a cached layout decision stays valid
pub const DEFAULT_CACHE_MINUTES: u64 = 30;

/// Widget presentation section
#[derive(Debug, Clone, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_widget_name")]
    pub name: String,
    #[serde(default)]
    pub columns: ColumnCount,
    #[serde(default)]
    pub uses_remote_storage: bool,
    /// Restricts the items the renderer accepts; `None` means the full vocabulary
    #[serde(default)]
    pub items: Option<Vec<WidgetItem>>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            name: default_widget_name(),
            columns: ColumnCount::default(),
            uses_remote_storage: false,
            items: None,
        }
    }
}

/// Layout cache section
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_cache_minutes")]
    pub max_age_minutes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            dir: None,
            max_age_minutes: DEFAULT_CACHE_MINUTES,
        }
    }
}

/// Context snapshot section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ContextConfig {
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub context: ContextConfig,
}

fn default_widget_name() -> String {
    DEFAULT_WIDGET_NAME.to_string()
}

fn default_cache_minutes() -> u64 {
    DEFAULT_CACHE_MINUTES
}
