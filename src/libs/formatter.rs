//! Time rendering helpers.
//!
//! Countdown values use the "MM:SS" clock face of the timer view;
//! cumulative totals use "HH:MM" since seconds stop being interesting
//! at that scale.

/// Formats a second count as "MM:SS" (e.g. 1495 -> "24:55").
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Formats a cumulative second count as "HH:MM" (e.g. 5400 -> "01:30").
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}
