//! Core types and logic for the ganttcal ecosystem.
//!
//! This crate provides everything the presentation layers (CLI, server)
//! share:
//! - `CalendarEvent` and `TimelineTask` records
//! - the calendar loader (fetch + parse + day-offset skew)
//! - the event-to-task mapper and the editable `Session`
//! - ICS export

pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod loader;
pub mod session;
pub mod task;

// Re-export the main types at crate root for convenience
pub use error::{GanttCalError, GanttCalResult};
pub use event::CalendarEvent;
pub use loader::{DayOffsets, load_calendar};
pub use session::{Session, TaskPatch};
pub use task::{TimelineTask, tasks_from_events};
