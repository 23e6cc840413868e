//! CSV row codec for the event file.
//!
//! The on-disk format is comma-separated text with a fixed header row and
//! one data row per event. Fields containing commas, quotes or newlines are
//! double-quoted with embedded quotes doubled, so free-text titles and
//! locations survive a round trip.

mod generate;
mod parse;

pub use generate::format_row;
pub use parse::{parse_event, split_records, split_row};

/// The exact header row of the event file.
pub const HEADER: &str = "id,title,date,location,capacity,category";
