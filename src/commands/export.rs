use crate::commands::load_with_spinner;
use anyhow::Result;
use ganttcal_core::constants::{DEFAULT_ORIGIN_HOST, EXPORT_FILE_NAME};
use ganttcal_core::ics::generate_ics;
use ganttcal_core::loader::DayOffsets;
use ganttcal_core::task::tasks_from_events;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub async fn run(url: &str, offsets: DayOffsets, out: Option<PathBuf>) -> Result<()> {
    let events = load_with_spinner(url, offsets).await?;
    let tasks = tasks_from_events(&events);

    let ics = generate_ics(&tasks, DEFAULT_ORIGIN_HOST)?;

    let path = out.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
    std::fs::write(&path, &ics)?;

    println!(
        "{}",
        format!("  Exported: {} tasks to {}", tasks.len(), path.display()).green()
    );

    Ok(())
}
