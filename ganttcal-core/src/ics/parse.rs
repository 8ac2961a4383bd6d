//! ICS parsing using the icalendar crate's parser.

use crate::error::{GanttCalError, GanttCalResult};
use crate::event::CalendarEvent;
use chrono::{DateTime, Utc};
use icalendar::{
    DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};

/// Parse ICS content into the list of events it contains.
///
/// Every top-level VEVENT becomes one `CalendarEvent`. A VEVENT without a
/// DTSTART is skipped rather than failing the whole calendar. An empty or
/// structurally invalid document is a `Parse` error; a valid calendar with
/// no events is an empty list, not an error.
pub fn parse_events(content: &str) -> GanttCalResult<Vec<CalendarEvent>> {
    if content.trim().is_empty() {
        return Err(GanttCalError::Parse("No ICS data returned".to_string()));
    }

    let unfolded = unfold(content);
    let calendar =
        read_calendar(&unfolded).map_err(|e| GanttCalError::Parse(e.to_string()))?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(event_from_component)
        .collect();

    Ok(events)
}

/// Map one VEVENT component to a `CalendarEvent`.
///
/// DTSTART is required. A missing DTEND falls back to the start instant,
/// which the task mapper later widens to a visible one-day range.
fn event_from_component(vevent: &Component) -> Option<CalendarEvent> {
    let start = to_instant(DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?);
    let end = vevent
        .find_prop("DTEND")
        .and_then(|p| DatePerhapsTime::try_from(p).ok())
        .map(to_instant)
        .unwrap_or(start);

    let summary = vevent.find_prop("SUMMARY").map(|p| p.val.to_string());
    let description = vevent.find_prop("DESCRIPTION").map(|p| p.val.to_string());
    let location = vevent.find_prop("LOCATION").map(|p| p.val.to_string());

    Some(CalendarEvent {
        summary,
        start,
        end,
        description,
        location,
    })
}

/// Convert icalendar's DatePerhapsTime to a UTC instant.
///
/// All-day dates become midnight UTC. Floating and zoned date-times are
/// taken at face value; the mapper only ever looks at the calendar date,
/// so cross-zone instant arithmetic is deliberately out of scope here.
fn to_instant(dpt: DatePerhapsTime) -> DateTime<Utc> {
    match dpt {
        DatePerhapsTime::Date(d) => d.and_hms_opt(0, 0, 0).unwrap().and_utc(),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            icalendar::CalendarDateTime::Utc(dt) => dt,
            icalendar::CalendarDateTime::Floating(naive) => naive.and_utc(),
            icalendar::CalendarDateTime::WithTimezone { date_time, .. } => date_time.and_utc(),
        },
    }
}
