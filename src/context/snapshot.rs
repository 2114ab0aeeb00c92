//! Context sources
//!
//! `SnapshotSource` reads the JSON export the rendering host writes before
//! invoking smartcal; `StaticSource` hands out a fixed record.

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use super::{ContextError, ContextSource, WidgetContext};

/// Reads a host-exported context snapshot from disk
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> Result<WidgetContext, ContextError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ContextError::Read {
            path: self.path.clone(),
            source,
        })?;

        let mut context: WidgetContext =
            serde_json::from_str(&contents).map_err(|source| ContextError::Parse {
                path: self.path.clone(),
                source,
            })?;

        stamp_now(&mut context);
        Ok(context)
    }
}

impl ContextSource for SnapshotSource {
    async fn gather(&self) -> Result<WidgetContext, ContextError> {
        self.load()
    }
}

/// Returns the same context on every call
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    context: WidgetContext,
}

impl StaticSource {
    pub fn new(context: WidgetContext) -> Self {
        Self { context }
    }
}

impl ContextSource for StaticSource {
    async fn gather(&self) -> Result<WidgetContext, ContextError> {
        let mut context = self.context.clone();
        stamp_now(&mut context);
        Ok(context)
    }
}

/// Source chosen at startup: a snapshot file when one is configured
#[derive(Debug, Clone)]
pub enum HostSource {
    Snapshot(SnapshotSource),
    Static(StaticSource),
}

impl HostSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => HostSource::Snapshot(SnapshotSource::new(path)),
            None => HostSource::Static(StaticSource::default()),
        }
    }
}

impl ContextSource for HostSource {
    async fn gather(&self) -> Result<WidgetContext, ContextError> {
        match self {
            HostSource::Snapshot(source) => source.gather().await,
            HostSource::Static(source) => source.gather().await,
        }
    }
}

/// Fill `now` unless the host already supplied one
fn stamp_now(context: &mut WidgetContext) {
    if context.now.trim().is_empty() {
        context.now = Local::now().to_rfc3339();
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
