//! smartcal: home-screen widget layouts chosen by an LLM
//!
//! The model picks which widget items to show and a short message; the
//! answer is cached on disk for a fixed window, replaced by a fixed fallback
//! on any failure, and rendered into the row/column markup the widget
//! rendering library consumes.

pub mod ai;
pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod fetcher;
pub mod layout;
pub mod output;
pub mod preview;
pub mod render;


pub use error::WidgetError;
pub use fetcher::{DecisionSource, LayoutFetcher};
pub use layout::{ItemCatalog, LayoutDecision, WidgetItem};
pub use render::{ColumnCount, LayoutRenderer};
