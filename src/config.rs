//! Configuration loading
//!
//! Reads `~/.config/smartcal/config.toml`. A missing file means defaults.

pub mod ai_types;
mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{
    CacheConfig, Config, ContextConfig, DEFAULT_CACHE_MINUTES, DEFAULT_WIDGET_NAME, WidgetConfig,
};

use crate::error::WidgetError;

const CONFIG_DIR: &str = "smartcal";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, WidgetError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

/// Load the config from an explicit path
///
/// A file that does not exist yields the defaults; a file that exists but
/// does not parse is an error so a typo never silently disables the AI.
pub fn load_config_from_path(path: &Path) -> Result<Config, WidgetError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map_err(|message| WidgetError::InvalidConfig {
        path: path.display().to_string(),
        message,
    })
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
