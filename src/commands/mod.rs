pub mod events;
pub mod export;
pub mod tasks;

use anyhow::Result;
use ganttcal_core::event::CalendarEvent;
use ganttcal_core::loader::{DayOffsets, load_calendar};
use indicatif::ProgressBar;
use std::time::Duration;

/// Fetch and parse a calendar with a terminal spinner.
pub async fn load_with_spinner(url: &str, offsets: DayOffsets) -> Result<Vec<CalendarEvent>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading ICS file...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let http = reqwest::Client::new();
    let result = load_calendar(&http, url, offsets).await;

    spinner.finish_and_clear();
    Ok(result?)
}
