//! File-backed layout cache
//!
//! One JSON file per widget name. Freshness comes from the file's
//! modification time, so the window survives restarts of the host.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::error::WidgetError;
use crate::layout::LayoutDecision;

const CACHE_DIR: &str = "smartcal";

/// Platform cache directory for smartcal
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(CACHE_DIR))
}

/// Cache file location for a widget
pub fn cache_path(base_dir: &Path, widget_name: &str) -> PathBuf {
    base_dir.join(format!("{}.json", widget_name))
}

/// True while `modified` is less than `max_age` old
///
/// A timestamp in the future counts as fresh.
pub fn is_fresh(modified: SystemTime, now: SystemTime, max_age: Duration) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age < max_age,
        Err(_) => true,
    }
}

#[derive(Debug, Clone)]
pub struct LayoutCache {
    path: PathBuf,
    max_age: Duration,
}

impl LayoutCache {
    pub fn new(path: impl Into<PathBuf>, max_age: Duration) -> Self {
        Self {
            path: path.into(),
            max_age,
        }
    }

    /// Cache for `widget_name` under `base_dir`
    pub fn for_widget(base_dir: &Path, widget_name: &str, max_age: Duration) -> Self {
        Self::new(cache_path(base_dir, widget_name), max_age)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// The cached decision if the file exists, parses, and is inside the window
    ///
    /// Unreadable or corrupt files are misses, never errors.
    pub fn read_fresh(&self) -> Option<LayoutDecision> {
        self.read_fresh_at(SystemTime::now())
    }

    pub fn read_fresh_at(&self, now: SystemTime) -> Option<LayoutDecision> {
        let modified = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    log::debug!("Cannot stat layout cache {}: {}", self.path.display(), e);
                }
                return None;
            }
        };

        if !is_fresh(modified, now, self.max_age) {
            log::debug!("Layout cache {} expired", self.path.display());
            return None;
        }

        match self.read() {
            Ok(decision) => Some(decision),
            Err(e) => {
                log::debug!("Ignoring unreadable layout cache {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Read the file regardless of age
    pub fn read(&self) -> Result<LayoutDecision, WidgetError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Overwrite the cache with `decision`, creating the directory if needed
    pub fn write(&self, decision: &LayoutDecision) -> Result<(), WidgetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(decision)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Remove the cache file; a missing file is not an error
    pub fn clear(&self) -> Result<bool, WidgetError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod cache_tests;
