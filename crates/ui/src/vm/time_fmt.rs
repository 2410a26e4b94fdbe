use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[must_use]
pub fn format_time_left(remaining_secs: u32) -> String {
    format!("Time Left : {remaining_secs} sec")
}

/// `m:ss` for durations shown on the results panel.
#[must_use]
pub fn format_elapsed(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}
