//! Terminal rendering traits for ganttcal types.
//!
//! Extension traits that add colored one-line rendering to core types
//! using owo_colors.

use ganttcal_core::event::CalendarEvent;
use ganttcal_core::task::TimelineTask;
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let when = format!(
            "{} - {}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        );

        let summary = match self.summary.as_deref() {
            Some(s) if !s.is_empty() => s.bold().to_string(),
            _ => "(no summary)".dimmed().to_string(),
        };

        let mut line = format!("{}  {}", when.dimmed(), summary);

        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            line.push_str(&format!("  @ {}", location.cyan()));
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!("  {}", truncate(description, 60).dimmed()));
        }

        line
    }
}

impl Render for TimelineTask {
    fn render(&self) -> String {
        let days = (self.end - self.start).num_days();
        let span = format!(
            "{} to {} ({} {})",
            self.start,
            self.end,
            days,
            pluralize("day", days)
        );

        let mut line = format!("{:>3}  {}  {}", self.id.dimmed(), self.name.bold(), span);

        if !self.description.is_empty() {
            line.push_str(&format!("  {}", truncate(&self.description, 60).dimmed()));
        }

        line
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}

fn pluralize(word: &str, count: i64) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
