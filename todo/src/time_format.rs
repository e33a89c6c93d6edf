//! Human-friendly creation timestamps.

use chrono::{DateTime, Datelike, TimeZone};
use std::fmt::Display;

/// Formats `timestamp` relative to `now`
///
/// Elapsed days are the absolute wall-clock difference truncated to whole
/// days, so the buckets do not follow calendar boundaries:
///
/// | days  | output                          |
/// |-------|---------------------------------|
/// | 0     | `Today at 09:05 AM`             |
/// | 1     | `Yesterday at 09:05 AM`         |
/// | 2..=6 | `3 days ago at 09:05 AM`        |
/// | 7+    | `Mar 4 at 09:05 AM`             |
///
/// The year is appended after the day (`Mar 4, 2024 at ...`) when it differs
/// from the year of `now`. Both timestamps are rendered in their own zone.
#[must_use]
pub fn format_relative_time<Tz>(timestamp: &DateTime<Tz>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let days = now
        .clone()
        .signed_duration_since(timestamp.clone())
        .num_days()
        .abs();
    let time = timestamp.format("%I:%M %p");

    match days {
        0 => format!("Today at {time}"),
        1 => format!("Yesterday at {time}"),
        2..=6 => format!("{days} days ago at {time}"),
        _ if timestamp.year() == now.year() => {
            format!("{} at {time}", timestamp.format("%b %-d"))
        },
        _ => format!("{} at {time}", timestamp.format("%b %-d, %Y")),
    }
}
