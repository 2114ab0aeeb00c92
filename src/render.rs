//! Layout markup rendering
//!
//! Turns a layout decision into the row/column mini-language the widget
//! rendering library consumes.

mod markup;

use serde::Deserialize;

pub use markup::{LayoutRenderer, distribute, escape_message};

/// Number of content columns (variant-dependent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum ColumnCount {
    Two,
    #[default]
    Three,
}

impl ColumnCount {
    pub fn get(self) -> usize {
        match self {
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ColumnCount::Two),
            3 => Ok(ColumnCount::Three),
            other => Err(format!("unsupported column count {}, expected 2 or 3", other)),
        }
    }
}
