//! Duration and time-of-day formatting, parsing and elapsed-time
//! arithmetic. All instants are local wall-clock `NaiveDateTime`s.

use chrono::NaiveDateTime;

use crate::error::{Result, TimingError};

/// Formats a whole-second duration as `hh:mm:ss`. Hours are not clamped
/// to 24 (a 25-hour race prints "25:00:00"). Callers guarantee a
/// non-negative input.
pub fn format_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// 24-hour `hh:mm:ss` rendering of an instant; empty string when there
/// is none.
pub fn format_time_of_day(instant: Option<NaiveDateTime>) -> String {
    match instant {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => String::new(),
    }
}

/// Parses a user-supplied `hh:mm:ss` (one- or two-digit hour, strictly
/// two-digit minutes and seconds) and grafts it onto the calendar date
/// of `base`. Any deviation is an [`TimingError::InvalidTimeOfDay`].
pub fn parse_time_of_day(base: NaiveDateTime, input: &str) -> Result<NaiveDateTime> {
    let invalid = || TimingError::InvalidTimeOfDay(input.to_string());

    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let (hour_s, minute_s, second_s) = (parts[0], parts[1], parts[2]);

    if hour_s.is_empty() || hour_s.len() > 2 || minute_s.len() != 2 || second_s.len() != 2 {
        return Err(invalid());
    }
    if !parts
        .iter()
        .all(|p| p.chars().all(|c| c.is_ascii_digit()))
    {
        return Err(invalid());
    }

    let hour: u32 = hour_s.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_s.parse().map_err(|_| invalid())?;
    let second: u32 = second_s.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 || second > 59 {
        return Err(invalid());
    }

    base.date()
        .and_hms_opt(hour, minute, second)
        .ok_or_else(invalid)
}

/// Whole-second elapsed time between two instants. Each operand is
/// floored to epoch seconds independently before subtracting, so a start
/// at `x.987` and a finish exactly 300s later at `y.000` yields 300, not
/// the 299 a floored difference would give.
pub fn elapsed_seconds(start: NaiveDateTime, finish: NaiveDateTime) -> i64 {
    finish.and_utc().timestamp() - start.and_utc().timestamp()
}
