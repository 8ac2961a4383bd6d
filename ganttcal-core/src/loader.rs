//! Calendar loading: fetch, parse, day-offset skew.

use crate::constants::{DEFAULT_OFFSET_END_DAYS, DEFAULT_OFFSET_START_DAYS};
use crate::error::{GanttCalError, GanttCalResult};
use crate::event::CalendarEvent;
use crate::ics::parse_events;
use chrono::Duration;

/// Uniform day shift applied to every loaded event boundary.
///
/// This is a deliberate skew, not a timezone correction: the upstream
/// calendar source reports boundaries with a known systematic bias, and
/// the user dials these in to compensate. `start` days are subtracted
/// from every event start, `end` days added to every event end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayOffsets {
    pub start: i64,
    pub end: i64,
}

impl Default for DayOffsets {
    fn default() -> Self {
        DayOffsets {
            start: DEFAULT_OFFSET_START_DAYS,
            end: DEFAULT_OFFSET_END_DAYS,
        }
    }
}

/// Fetch the calendar at `url`, parse it, and apply the offset skew.
///
/// - a transport failure is `Fetch`
/// - a non-success HTTP status is `FetchStatus` carrying the status code
/// - an empty or malformed body is `Parse`
///
/// No retries, no timeout policy, no partial results: the call either
/// yields the full event list or fails with the first error hit.
pub async fn load_calendar(
    http: &reqwest::Client,
    url: &str,
    offsets: DayOffsets,
) -> GanttCalResult<Vec<CalendarEvent>> {
    let body = fetch_ics(http, url).await?;
    let mut events = parse_events(&body)?;
    apply_offsets(&mut events, offsets);
    Ok(events)
}

/// GET the raw ICS text.
async fn fetch_ics(http: &reqwest::Client, url: &str) -> GanttCalResult<String> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| GanttCalError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GanttCalError::FetchStatus(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| GanttCalError::Fetch(e.to_string()))
}

/// Shift every event by the configured day offsets, expressed as whole
/// 24-hour blocks on the underlying instants.
pub fn apply_offsets(events: &mut [CalendarEvent], offsets: DayOffsets) {
    let start_shift = Duration::hours(offsets.start * 24);
    let end_shift = Duration::hours(offsets.end * 24);

    for event in events {
        event.start -= start_shift;
        event.end += end_shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Utc};

    fn make_event(start_day: u32, end_day: u32) -> CalendarEvent {
        CalendarEvent {
            summary: Some("Shifted".to_string()),
            start: Utc.with_ymd_and_hms(2024, 4, start_day, 12, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 4, end_day, 12, 0, 0).unwrap(),
            description: None,
            location: None,
        }
    }

    #[test]
    fn test_default_offsets_are_five_and_zero() {
        let offsets = DayOffsets::default();
        assert_eq!(offsets.start, 5);
        assert_eq!(offsets.end, 0);
    }

    #[test]
    fn test_apply_offsets_shifts_start_back_and_end_forward() {
        let mut events = vec![make_event(10, 12)];

        apply_offsets(&mut events, DayOffsets { start: 5, end: 2 });

        assert_eq!(
            events[0].start,
            Utc.with_ymd_and_hms(2024, 4, 5, 12, 0, 0).unwrap(),
            "Start moves back by offset.start days"
        );
        assert_eq!(
            events[0].end,
            Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap(),
            "End moves forward by offset.end days"
        );
    }

    #[test]
    fn test_apply_zero_offsets_is_identity() {
        let mut events = vec![make_event(10, 12)];
        let original = events.clone();

        apply_offsets(&mut events, DayOffsets { start: 0, end: 0 });

        assert_eq!(events, original);
    }

    #[test]
    fn test_apply_offsets_is_uniform_across_events() {
        let mut events = vec![make_event(10, 11), make_event(20, 21)];

        apply_offsets(&mut events, DayOffsets { start: 1, end: 1 });

        assert_eq!(events[0].start.date_naive().day(), 9);
        assert_eq!(events[1].start.date_naive().day(), 19);
        assert_eq!(events[0].end.date_naive().day(), 12);
        assert_eq!(events[1].end.date_naive().day(), 22);
    }
}
