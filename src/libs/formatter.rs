//! Time duration formatting for user-facing output.
//!
//! Durations appear in two places: the startup banner shows the configured
//! intervals as "HH:MM", and the session summary shows accumulated active
//! time as "HH:MM:SS". Negative durations are clamped to zero.

use chrono::Duration;

/// Formats a `chrono::Duration` as a zero-padded "HH:MM" string.
///
/// Seconds are dropped, negative durations render as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a second count as a zero-padded "HH:MM:SS" string.
///
/// Used for accumulated active time, where sub-minute precision matters.
pub fn format_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
