use crate::commands::load_with_spinner;
use crate::render::Render;
use anyhow::Result;
use ganttcal_core::loader::DayOffsets;
use ganttcal_core::task::tasks_from_events;
use owo_colors::OwoColorize;

pub async fn run(url: &str, offsets: DayOffsets) -> Result<()> {
    let events = load_with_spinner(url, offsets).await?;
    let tasks = tasks_from_events(&events);

    if tasks.is_empty() {
        println!("{}", "No events found in the ICS file.".dimmed());
        return Ok(());
    }

    println!("{}", format!("{} timeline tasks", tasks.len()).bold());
    println!();

    for task in &tasks {
        println!("  {}", task.render());
    }

    Ok(())
}
