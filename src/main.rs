mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ganttcal_core::constants::{
    DEFAULT_OFFSET_END_DAYS, DEFAULT_OFFSET_START_DAYS, MAX_OFFSET_DAYS,
};
use ganttcal_core::loader::DayOffsets;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ganttcal")]
#[command(about = "Load an ICS calendar from a URL, shift its dates, and export timeline tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the events in a calendar, after the day-offset shift
    Events {
        /// URL of the .ics file
        url: String,

        /// Days subtracted from every event start
        #[arg(long, default_value_t = DEFAULT_OFFSET_START_DAYS, value_parser = offset_in_range)]
        offset_start: i64,

        /// Days added to every event end
        #[arg(long, default_value_t = DEFAULT_OFFSET_END_DAYS, value_parser = offset_in_range)]
        offset_end: i64,
    },
    /// Show the timeline tasks a calendar maps to
    Tasks {
        /// URL of the .ics file
        url: String,

        /// Days subtracted from every event start
        #[arg(long, default_value_t = DEFAULT_OFFSET_START_DAYS, value_parser = offset_in_range)]
        offset_start: i64,

        /// Days added to every event end
        #[arg(long, default_value_t = DEFAULT_OFFSET_END_DAYS, value_parser = offset_in_range)]
        offset_end: i64,
    },
    /// Load a calendar and write the mapped tasks back out as an .ics file
    Export {
        /// URL of the .ics file
        url: String,

        /// Days subtracted from every event start
        #[arg(long, default_value_t = DEFAULT_OFFSET_START_DAYS, value_parser = offset_in_range)]
        offset_start: i64,

        /// Days added to every event end
        #[arg(long, default_value_t = DEFAULT_OFFSET_END_DAYS, value_parser = offset_in_range)]
        offset_end: i64,

        /// Output path (defaults to updated.ics)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Parse an offset flag, bounded like the UI slider.
fn offset_in_range(s: &str) -> Result<i64, String> {
    let days: i64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number of days"))?;
    if (0..=MAX_OFFSET_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(format!("offset must be between 0 and {MAX_OFFSET_DAYS} days"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Events {
            url,
            offset_start,
            offset_end,
        } => {
            let offsets = DayOffsets {
                start: offset_start,
                end: offset_end,
            };
            commands::events::run(&url, offsets).await
        }
        Commands::Tasks {
            url,
            offset_start,
            offset_end,
        } => {
            let offsets = DayOffsets {
                start: offset_start,
                end: offset_end,
            };
            commands::tasks::run(&url, offsets).await
        }
        Commands::Export {
            url,
            offset_start,
            offset_end,
            out,
        } => {
            let offsets = DayOffsets {
                start: offset_start,
                end: offset_end,
            };
            commands::export::run(&url, offsets, out).await
        }
    }
}
