//! Error types for the ganttcal ecosystem.

use thiserror::Error;

/// Errors that can occur in ganttcal operations.
///
/// All variants are recoverable at the presentation boundary: the
/// triggering operation is aborted and prior session state is left
/// untouched. There is no fatal class and no retry policy.
#[derive(Error, Debug)]
pub enum GanttCalError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("HTTP error! Status: {0}")]
    FetchStatus(u16),

    #[error("ICS parse error: {0}")]
    Parse(String),

    #[error("Nothing to export: the task list is empty")]
    EmptyExport,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ganttcal operations.
pub type GanttCalResult<T> = Result<T, GanttCalError>;
