use crate::commands::load_with_spinner;
use crate::render::Render;
use anyhow::Result;
use ganttcal_core::loader::DayOffsets;
use owo_colors::OwoColorize;

pub async fn run(url: &str, offsets: DayOffsets) -> Result<()> {
    let events = load_with_spinner(url, offsets).await?;

    if events.is_empty() {
        println!("{}", "No events found in the ICS file.".dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{} events (start shifted -{}d, end shifted +{}d)",
            events.len(),
            offsets.start,
            offsets.end
        )
        .bold()
    );
    println!();

    for event in &events {
        println!("  {}", event.render());
    }

    Ok(())
}
