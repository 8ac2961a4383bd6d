//! Parsed calendar event records.
//!
//! `CalendarEvent` is the neutral shape the loader produces from ICS input
//! and the task mapper consumes. It carries instants, not calendar dates;
//! day normalization happens in the mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One event extracted from a parsed calendar.
///
/// The source does not guarantee `end >= start`; `end` may equal `start`
/// (zero-length events are common in exported calendars). Consumers must
/// not assume a positive duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title (SUMMARY). Absent or empty in some feeds.
    pub summary: Option<String>,
    /// Inclusive start instant (DTSTART).
    pub start: DateTime<Utc>,
    /// End instant (DTEND). Equals `start` when the source omits DTEND.
    pub end: DateTime<Utc>,
    pub description: Option<String>,
    pub location: Option<String>,
}
