//! Layout decision model
//!
//! A layout decision is the `{layout, message}` record the model returns:
//! an ordered, newline-separated list of widget items plus a one-line message.

mod decision;
mod item;

pub use decision::{FALLBACK_LAYOUT, FALLBACK_MESSAGE, LayoutDecision};
pub use item::{ItemCatalog, WidgetItem};
