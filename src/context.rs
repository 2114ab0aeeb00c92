//! Widget context
//!
//! The data the model sees when choosing a layout: weather, sun times,
//! calendar events, reminders, news headlines and the device battery.
//! Gathering that data is the rendering host's job; this module only defines
//! the record and the sources that supply it.

mod snapshot;
mod types;

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

pub use snapshot::{HostSource, SnapshotSource, StaticSource};
pub use types::{Battery, CalendarEvent, NewsItem, Reminder, SunTimes, Weather, WidgetContext};

/// Errors that can occur while gathering context
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to read context snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid context snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Capability that produces a [`WidgetContext`]
pub trait ContextSource {
    fn gather(&self) -> impl Future<Output = Result<WidgetContext, ContextError>> + Send;
}
