//! Tests for layout markup rendering

use super::*;
use insta::assert_snapshot;
use proptest::prelude::*;

#[test]
fn test_distribute_round_robin_three_columns() {
    let columns = distribute(vec!["a", "b", "c", "d"], 3);
    assert_eq!(columns, vec![vec!["a", "d"], vec!["b"], vec!["c"]]);
}

#[test]
fn test_distribute_round_robin_two_columns() {
    let columns = distribute(vec!["a", "b", "c", "d", "e"], 2);
    assert_eq!(columns, vec![vec!["a", "c", "e"], vec!["b", "d"]]);
}

#[test]
fn test_distribute_fewer_items_than_columns() {
    let columns = distribute(vec!["a"], 3);
    assert_eq!(columns, vec![vec!["a"]]);
}

#[test]
fn test_distribute_empty() {
    let columns: Vec<Vec<&str>> = distribute(Vec::new(), 3);
    assert!(columns.is_empty());
}

#[test]
fn test_escape_message_quotes() {
    assert_eq!(escape_message(r#"Say "hi""#), r#"Say \"hi\""#);
}

#[test]
fn test_escape_message_collapses_lines() {
    assert_eq!(escape_message("Rainy\n  take an umbrella\n"), "Rainy take an umbrella");
}

#[test]
fn test_render_three_columns() {
    let renderer = LayoutRenderer::new(ColumnCount::Three, ItemCatalog::full());
    let decision = LayoutDecision::new("date\nevents\ncurrent\nreminders", "Good morning");

    assert_snapshot!(renderer.render(&decision), @r#"
    row
      column
        text("Good morning")
    row
      column
        date
        reminders
      column
        events
      column
        current
    "#);
}

#[test]
fn test_render_two_columns_drops_unknown_and_escapes() {
    let renderer = LayoutRenderer::new(ColumnCount::Two, ItemCatalog::full());
    let decision = LayoutDecision::new("news\nweather\nbattery\nweek", r#"It's "crunch" day"#);

    assert_snapshot!(renderer.render(&decision), @r#"
    row
      column
        text("It's \"crunch\" day")
    row
      column
        news
        week
      column
        battery
    "#);
}

#[test]
fn test_render_without_recognized_items_is_header_only() {
    let renderer = LayoutRenderer::default();
    let decision = LayoutDecision::new("weather\ncalendar", "Hello");

    assert_eq!(
        renderer.render(&decision),
        "row\n  column\n    text(\"Hello\")\n"
    );
}

#[test]
fn test_render_respects_catalog() {
    let renderer = LayoutRenderer::new(
        ColumnCount::Three,
        ItemCatalog::from_items([WidgetItem::Date, WidgetItem::Current]),
    );
    let decision = LayoutDecision::new("date\nnews\ncurrent", "Hi");
    let markup = renderer.render(&decision);

    assert!(markup.contains("    date\n"));
    assert!(markup.contains("    current\n"));
    assert!(!markup.contains("news"));
}

#[test]
fn test_arrange_fallback() {
    let columns = LayoutRenderer::default().arrange(&LayoutDecision::fallback());
    assert_eq!(
        columns,
        vec![
            vec![WidgetItem::Date, WidgetItem::Reminders],
            vec![WidgetItem::Current],
            vec![WidgetItem::Events],
        ]
    );
}

#[test]
fn test_column_count_try_from() {
    assert_eq!(ColumnCount::try_from(2u8), Ok(ColumnCount::Two));
    assert_eq!(ColumnCount::try_from(3u8), Ok(ColumnCount::Three));
    assert!(ColumnCount::try_from(4u8).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Distribution keeps every item exactly once and bucket sizes differ by at most one
    #[test]
    fn prop_distribute_is_balanced_permutation(
        items in prop::collection::vec(any::<u16>(), 0..40),
        columns in 1usize..5,
    ) {
        let buckets = distribute(items.clone(), columns);
        prop_assert!(buckets.len() <= columns);

        let total: usize = buckets.iter().map(Vec::len).sum();
        prop_assert_eq!(total, items.len());

        if let (Some(max), Some(min)) = (
            buckets.iter().map(Vec::len).max(),
            buckets.iter().map(Vec::len).min(),
        ) {
            prop_assert!(max - min <= 1);
        }

        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(buckets[i % columns][i / columns], *item);
        }
    }

    // Rendered text nodes never contain an unescaped quote or a line break
    #[test]
    fn prop_escaped_message_is_single_line(message in ".*") {
        let escaped = escape_message(&message);
        prop_assert!(!escaped.contains('\n'));
        let unescaped_quotes = escaped
            .char_indices()
            .filter(|(i, c)| *c == '"' && !escaped[..*i].ends_with('\\'))
            .count();
        prop_assert_eq!(unescaped_quotes, 0);
    }
}
