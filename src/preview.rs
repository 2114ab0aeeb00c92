//! Interactive terminal preview
//!
//! Draws the widget the way the rendering library would lay it out: the
//! message on top, then one bordered column per bucket with a one-line
//! summary of each item taken from the context.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::context::WidgetContext;
use crate::layout::{LayoutDecision, WidgetItem};
use crate::render::LayoutRenderer;

/// Height of the message header including borders
const HEADER_HEIGHT: u16 = 3;

/// Everything one preview frame needs
pub struct Preview<'a> {
    pub decision: &'a LayoutDecision,
    pub renderer: &'a LayoutRenderer,
    pub context: &'a WidgetContext,
}

impl Preview<'_> {
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)])
            .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_columns(frame, layout[1]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Widget preview (q to quit) ")
            .border_style(Style::default().fg(Color::Cyan));

        let message = Paragraph::new(self.decision.message.as_str())
            .block(block)
            .style(Style::default().add_modifier(Modifier::BOLD));

        frame.render_widget(message, area);
    }

    fn render_columns(&self, frame: &mut Frame, area: Rect) {
        let columns = self.renderer.arrange(self.decision);
        if columns.is_empty() {
            let empty = Paragraph::new("No recognized widget items")
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        let constraints = vec![Constraint::Ratio(1, columns.len() as u32); columns.len()];
        let areas = Layout::horizontal(constraints).split(area);

        for (column, column_area) in columns.iter().zip(areas.iter()) {
            let lines: Vec<Line> = column
                .iter()
                .flat_map(|item| {
                    [
                        Line::from(Span::styled(
                            item.as_str(),
                            Style::default().fg(Color::Yellow),
                        )),
                        Line::from(item_summary(*item, self.context)),
                        Line::default(),
                    ]
                })
                .collect();

            let paragraph = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                )
                .wrap(Wrap { trim: true });

            frame.render_widget(paragraph, *column_area);
        }
    }
}

/// Run the preview until `q` or `Esc`
pub fn run_preview(preview: &Preview) -> Result<()> {
    let terminal = ratatui::init();
    let result = preview_loop(terminal, preview);
    ratatui::restore();
    result
}

fn preview_loop(mut terminal: DefaultTerminal, preview: &Preview) -> Result<()> {
    loop {
        terminal.draw(|frame| preview.render(frame))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
        {
            return Ok(());
        }
    }
}

/// One-line description of what `item` would show
pub fn item_summary(item: WidgetItem, context: &WidgetContext) -> String {
    let now = parse_now(&context.now);

    match item {
        WidgetItem::Date => now
            .map(|dt| dt.format("%A, %B %-d").to_string())
            .unwrap_or_else(|| "Today".to_string()),
        WidgetItem::Greeting => match now.map(|dt| dt.hour()) {
            Some(h) if h < 12 => "Good morning".to_string(),
            Some(h) if h < 18 => "Good afternoon".to_string(),
            Some(_) => "Good evening".to_string(),
            None => "Hello".to_string(),
        },
        WidgetItem::Events => match context.events.split_first() {
            Some((first, rest)) => {
                let when = if first.all_day { "All day" } else { first.start.as_str() };
                let more = if rest.is_empty() {
                    String::new()
                } else {
                    format!(" (+{} more)", rest.len())
                };
                format!("{} {}{}", when, first.title, more)
            }
            None => "No events".to_string(),
        },
        WidgetItem::Reminders => match context.reminders.len() {
            0 => "No reminders".to_string(),
            1 => context.reminders[0].title.clone(),
            n => format!("{} (+{} more)", context.reminders[0].title, n - 1),
        },
        WidgetItem::Current => match &context.weather {
            Some(w) => format!("{:.0}°{} {}", w.temperature, w.unit, w.condition),
            None => "No weather".to_string(),
        },
        WidgetItem::Future | WidgetItem::Forecast => match &context.weather {
            Some(w) => match (w.high, w.low) {
                (Some(high), Some(low)) => format!("High {:.0}° / Low {:.0}°", high, low),
                _ => w.condition.clone(),
            },
            None => "No forecast".to_string(),
        },
        WidgetItem::Hourly => match &context.weather {
            Some(w) => format!("Hourly: {}", w.condition),
            None => "No forecast".to_string(),
        },
        WidgetItem::Battery => match &context.battery {
            Some(b) if b.charging => format!("{}% charging", b.percent()),
            Some(b) => format!("{}%", b.percent()),
            None => "Battery unknown".to_string(),
        },
        WidgetItem::Sunrise => match &context.sun {
            Some(sun) => format!("Sunrise {} / Sunset {}", sun.sunrise, sun.sunset),
            None => "No sun times".to_string(),
        },
        WidgetItem::Week => now
            .map(|dt| format!("Week {}", dt.iso_week().week()))
            .unwrap_or_else(|| "This week".to_string()),
        WidgetItem::News => context
            .news
            .first()
            .map(|n| n.title.clone())
            .unwrap_or_else(|| "No headlines".to_string()),
        WidgetItem::Space => String::new(),
    }
}

fn parse_now(now: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(now).ok()
}

#[cfg(test)]
#[path = "preview_tests.rs"]
mod preview_tests;
