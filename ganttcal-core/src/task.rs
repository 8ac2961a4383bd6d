//! Timeline task records and the event-to-task mapping.
//!
//! A `TimelineTask` is one bar on the day-granularity timeline widget.
//! The serde shape (string id, `YYYY-MM-DD` dates, progress, dependencies)
//! is exactly what the widget consumes.

use crate::event::CalendarEvent;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Name given to tasks whose source event has no usable summary.
pub const DEFAULT_TASK_NAME: &str = "No Summary";

/// One bar on the timeline. Mutable for the lifetime of a session; the
/// whole list is discarded and rebuilt on the next load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineTask {
    /// Ordinal id ("1", "2", ...), unique within a session.
    pub id: String,
    pub name: String,
    /// First day of the bar.
    pub start: NaiveDate,
    /// Day after the last day of the bar; always strictly after `start`.
    pub end: NaiveDate,
    pub description: String,
    /// Completion percentage shown by the widget. Always 0 at creation.
    pub progress: u8,
    /// Comma-separated ids of predecessor tasks. Unused, kept for the
    /// widget's task shape.
    pub dependencies: String,
}

/// Map parsed events to a fresh, ordered task list.
///
/// Pure: the input is not mutated and every call produces a new list.
/// Date normalization drops time-of-day; a range that would collapse to
/// zero (or negative) width is widened to one day so every task renders
/// as a visible bar.
pub fn tasks_from_events(events: &[CalendarEvent]) -> Vec<TimelineTask> {
    events
        .iter()
        .enumerate()
        .map(|(index, event)| {
            let start = event.start.date_naive();
            let end = normalize_end(start, event.end.date_naive());

            TimelineTask {
                id: (index + 1).to_string(),
                name: non_empty(event.summary.as_deref(), DEFAULT_TASK_NAME),
                start,
                end,
                description: non_empty(event.description.as_deref(), ""),
                progress: 0,
                dependencies: String::new(),
            }
        })
        .collect()
}

/// Tasks must span at least one day to render as a visible bar.
fn normalize_end(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    if end <= start {
        start.checked_add_days(Days::new(1)).unwrap_or(start)
    } else {
        end
    }
}

fn non_empty(value: Option<&str>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}
