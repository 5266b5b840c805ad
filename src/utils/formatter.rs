// src/utils/formatter.rs
use crate::filesystem::FileEntry;
use chrono::{DateTime, TimeZone};

/// Abbreviated month, space padded day, 24-hour time: `Jan  2 15:04`.
const MTIME_FORMAT: &str = "%b %e %H:%M";

pub fn format_mtime<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format(MTIME_FORMAT).to_string()
}

/// Formats one long-listing line; `display_name` is the already decorated name.
pub fn format_long_line(entry: &FileEntry, display_name: &str) -> String {
    let mtime = match &entry.modified {
        Some(time) => format_mtime(time),
        None => format!("{:>12}", "?"),
    };
    format!("{} {:>8} {} {}", entry.permissions, entry.size, mtime, display_name)
}
