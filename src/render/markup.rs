use super::ColumnCount;
use crate::layout::{ItemCatalog, LayoutDecision, WidgetItem};

const INDENT: &str = "  ";

/// Renders decisions for one widget variant
#[derive(Debug, Clone)]
pub struct LayoutRenderer {
    columns: ColumnCount,
    catalog: ItemCatalog,
}

impl LayoutRenderer {
    pub fn new(columns: ColumnCount, catalog: ItemCatalog) -> Self {
        Self { columns, catalog }
    }

    pub fn columns(&self) -> ColumnCount {
        self.columns
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Recognized items bucketed into columns
    pub fn arrange(&self, decision: &LayoutDecision) -> Vec<Vec<WidgetItem>> {
        distribute(decision.items(&self.catalog), self.columns.get())
    }

    /// Header row with the message, then one content row
    ///
    /// Columns left empty by the distribution are omitted. If no item is
    /// recognized only the header row is produced.
    pub fn render(&self, decision: &LayoutDecision) -> String {
        let mut out = String::new();

        push_line(&mut out, 0, "row");
        push_line(&mut out, 1, "column");
        push_line(
            &mut out,
            2,
            &format!("text(\"{}\")", escape_message(&decision.message)),
        );

        let columns = self.arrange(decision);
        if columns.is_empty() {
            return out;
        }

        push_line(&mut out, 0, "row");
        for column in columns {
            push_line(&mut out, 1, "column");
            for item in column {
                push_line(&mut out, 2, item.as_str());
            }
        }

        out
    }
}

impl Default for LayoutRenderer {
    fn default() -> Self {
        Self::new(ColumnCount::default(), ItemCatalog::full())
    }
}

/// Round-robin `items` over at most `columns` buckets
///
/// Item `i` lands in bucket `i % columns`; trailing empty buckets are not returned.
pub fn distribute<T>(items: Vec<T>, columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let used = items.len().min(columns);
    let mut buckets: Vec<Vec<T>> = (0..used).map(|_| Vec::new()).collect();

    for (i, item) in items.into_iter().enumerate() {
        buckets[i % columns].push(item);
    }

    buckets
}

/// Make the message safe inside a quoted text node
///
/// Double quotes are backslash-escaped; line breaks collapse to one space.
pub fn escape_message(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "\\\"")
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod markup_tests;
