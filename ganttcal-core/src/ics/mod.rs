//! ICS parsing and generation.
//!
//! Parsing delegates to the icalendar crate's parser; generation writes
//! the export document directly because its line order is a fixed contract.

mod generate;
mod parse;

pub use generate::generate_ics;
pub use parse::parse_events;
