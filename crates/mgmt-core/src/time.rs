//! Timestamp formatting for persisted log lines.

use chrono::{DateTime, Local, TimeZone};

/// `strftime` pattern of the persisted timestamp: local time with
/// millisecond precision, comma-separated.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS,mmm`.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time, formatted for a persisted line.
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
