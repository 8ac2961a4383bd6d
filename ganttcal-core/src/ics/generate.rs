//! ICS export generation.
//!
//! The export format is a fixed contract: CRLF line endings everywhere,
//! a fixed header, and per event exactly UID, SUMMARY, DTSTART, DTEND in
//! that order with all-day DATE values. The icalendar crate's builder
//! orders properties itself and inserts DTSTAMP/UID lines, so the export
//! is written line-by-line instead.

use crate::constants::ICS_PRODID;
use crate::error::{GanttCalError, GanttCalResult};
use crate::task::TimelineTask;

/// Generate .ics content for a task list.
///
/// `origin_host` is the host serving the application; it is appended to
/// each task id to form a UID unique per session and host.
///
/// Fails with `EmptyExport` when there are no tasks. Never fails for a
/// non-empty list.
pub fn generate_ics(tasks: &[TimelineTask], origin_host: &str) -> GanttCalResult<String> {
    if tasks.is_empty() {
        return Err(GanttCalError::EmptyExport);
    }

    let mut out = String::new();
    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(&mut out, &format!("PRODID:{ICS_PRODID}"));

    for task in tasks {
        push_line(&mut out, "BEGIN:VEVENT");
        push_line(&mut out, &format!("UID:{}@{}", task.id, origin_host));
        // Written verbatim: commas, semicolons and newlines in the name
        // are not escaped (matches the upstream exporter).
        push_line(&mut out, &format!("SUMMARY:{}", task.name));
        push_line(
            &mut out,
            &format!("DTSTART;VALUE=DATE:{}", task.start.format("%Y%m%d")),
        );
        push_line(
            &mut out,
            &format!("DTEND;VALUE=DATE:{}", task.end.format("%Y%m%d")),
        );
        push_line(&mut out, "END:VEVENT");
    }

    push_line(&mut out, "END:VCALENDAR");
    Ok(out)
}

/// Append one content line with the CRLF terminator RFC 5545 requires.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ics::parse_events;
    use chrono::NaiveDate;

    fn make_task(id: &str, name: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> TimelineTask {
        TimelineTask {
            id: id.to_string(),
            name: name.to_string(),
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            description: String::new(),
            progress: 0,
            dependencies: String::new(),
        }
    }

    #[test]
    fn test_generate_ics_exact_output() {
        let tasks = vec![
            make_task("1", "Standup", (2024, 1, 10), (2024, 1, 11)),
            make_task("2", "Offsite", (2024, 1, 11), (2024, 1, 12)),
        ];

        let ics = generate_ics(&tasks, "planner.example.com").unwrap();

        let expected = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//ganttcal//EN\r\n\
BEGIN:VEVENT\r\n\
UID:1@planner.example.com\r\n\
SUMMARY:Standup\r\n\
DTSTART;VALUE=DATE:20240110\r\n\
DTEND;VALUE=DATE:20240111\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:2@planner.example.com\r\n\
SUMMARY:Offsite\r\n\
DTSTART;VALUE=DATE:20240111\r\n\
DTEND;VALUE=DATE:20240112\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

        assert_eq!(ics, expected, "Export must be bit-exact. Got:\n{ics}");
    }

    #[test]
    fn test_generate_ics_empty_list_fails() {
        let err = generate_ics(&[], "localhost").unwrap_err();
        assert!(
            matches!(err, GanttCalError::EmptyExport),
            "Expected EmptyExport, got: {err:?}"
        );
    }

    #[test]
    fn test_generate_ics_every_line_is_crlf_terminated() {
        let tasks = vec![make_task("1", "Solo", (2024, 5, 1), (2024, 5, 2))];
        let ics = generate_ics(&tasks, "localhost").unwrap();

        assert!(ics.ends_with("\r\n"), "Output must end with CRLF");
        for line in ics.split_inclusive("\r\n") {
            assert!(
                line.ends_with("\r\n"),
                "Every line must end with CRLF. Got: {line:?}"
            );
            let content = &line[..line.len() - 2];
            assert!(
                !content.contains('\n') && !content.contains('\r'),
                "No bare newlines inside a line. Got: {line:?}"
            );
        }
    }

    #[test]
    fn test_generate_then_parse_roundtrips_dates() {
        let tasks = vec![
            make_task("1", "Standup", (2024, 1, 10), (2024, 1, 11)),
            make_task("2", "Offsite", (2024, 1, 11), (2024, 1, 12)),
        ];

        let ics = generate_ics(&tasks, "localhost").unwrap();
        let events = parse_events(&ics).expect("Exported calendar should parse back");

        assert_eq!(events.len(), tasks.len());
        for (event, task) in events.iter().zip(&tasks) {
            assert_eq!(event.start.date_naive(), task.start);
            assert_eq!(event.end.date_naive(), task.end);
            assert_eq!(event.summary.as_deref(), Some(task.name.as_str()));
        }
    }

    #[test]
    fn test_generate_ics_unescaped_summary_is_verbatim() {
        // Known fidelity gap carried from the source exporter: separators
        // in the name pass through untouched.
        let tasks = vec![make_task("1", "Lunch, then; review", (2024, 2, 1), (2024, 2, 2))];
        let ics = generate_ics(&tasks, "localhost").unwrap();

        assert!(
            ics.contains("SUMMARY:Lunch, then; review\r\n"),
            "Summary should be written verbatim. Got:\n{ics}"
        );
    }
}
