//! Shared constants for the ganttcal ecosystem.

/// Days subtracted from every event start when no offset is given.
/// Compensates for a known systematic bias in the upstream calendar
/// source's reported start boundaries.
pub const DEFAULT_OFFSET_START_DAYS: i64 = 5;

/// Days added to every event end when no offset is given.
pub const DEFAULT_OFFSET_END_DAYS: i64 = 0;

/// Upper bound for either day offset at the input surface (slider/flag).
pub const MAX_OFFSET_DAYS: i64 = 30;

/// Product identifier written into exported calendars.
pub const ICS_PRODID: &str = "-//ganttcal//EN";

/// File name offered for the exported calendar.
pub const EXPORT_FILE_NAME: &str = "updated.ics";

/// MIME type of the exported calendar.
pub const EXPORT_MIME_TYPE: &str = "text/calendar; charset=utf-8";

/// Origin host used in exported UIDs when no serving host is known.
pub const DEFAULT_ORIGIN_HOST: &str = "localhost";
