//! ICS feed parsing and merged-feed generation.

mod generate;
mod parse;

pub use generate::export_ics;
pub use parse::{DateValue, EventComponent, parse_feed};
