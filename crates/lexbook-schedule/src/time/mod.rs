//! 12-hour and 24-hour time-of-day strings.
//!
//! The wizard shows and submits `"2:00 PM"`; stored slots and form inputs use
//! `"14:00:00"`. Parsing goes through [`NaiveTime`] so both directions agree.

use chrono::{NaiveTime, Timelike};

use crate::error::{ScheduleError, ScheduleResult};

const FORMAT_24: &str = "%H:%M:%S";

/// ## Summary
/// Parses a 12-hour time such as `"2:00 PM"`, `"02:30pm"` or `"11:15:30 am"`.
///
/// `12 AM` is midnight and `12 PM` is noon.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTime` if the meridiem is missing, the hour is
/// outside `1..=12`, or the minutes or seconds are out of range.
pub fn parse_12_hour(raw: &str) -> ScheduleResult<NaiveTime> {
    let invalid = || ScheduleError::InvalidTime(raw.to_string());
    let text = raw.trim();

    let split = text.len().checked_sub(2).ok_or_else(invalid)?;
    let (clock, meridiem) = (
        text.get(..split).ok_or_else(invalid)?,
        text.get(split..).ok_or_else(invalid)?,
    );
    let is_pm = if meridiem.eq_ignore_ascii_case("pm") {
        true
    } else if meridiem.eq_ignore_ascii_case("am") {
        false
    } else {
        return Err(invalid());
    };

    let (hour, minute, second) = split_clock(clock.trim_end()).ok_or_else(invalid)?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }
    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// ## Summary
/// Parses a 24-hour time in `HH:MM` or `HH:MM:SS` form.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTime` if the text is not a valid time of day.
pub fn parse_24_hour(raw: &str) -> ScheduleResult<NaiveTime> {
    let invalid = || ScheduleError::InvalidTime(raw.to_string());
    let (hour, minute, second) = split_clock(raw.trim()).ok_or_else(invalid)?;
    if hour > 23 {
        return Err(invalid());
    }
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// ## Summary
/// Parses either notation, trying the 12-hour form when a meridiem is present.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTime` if neither form matches.
pub fn parse_time(raw: &str) -> ScheduleResult<NaiveTime> {
    let lowered = raw.trim().to_ascii_lowercase();
    if lowered.ends_with("am") || lowered.ends_with("pm") {
        parse_12_hour(raw)
    } else {
        parse_24_hour(raw)
    }
}

/// Renders `time` as `"2:00 PM"`, adding seconds only when they are non-zero.
#[must_use]
pub fn format_12_hour(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    if time.second() == 0 {
        format!("{hour}:{:02} {meridiem}", time.minute())
    } else {
        format!("{hour}:{:02}:{:02} {meridiem}", time.minute(), time.second())
    }
}

#[must_use]
pub fn format_24_hour(time: NaiveTime) -> String {
    time.format(FORMAT_24).to_string()
}

/// ## Summary
/// Converts a 12-hour time to `HH:MM:SS`: `"2:00 PM"` becomes `"14:00:00"`.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTime` if the input is not a 12-hour time.
pub fn to_24_hour(raw: &str) -> ScheduleResult<String> {
    parse_12_hour(raw).map(format_24_hour)
}

/// ## Summary
/// Converts a 24-hour time to 12-hour form: `"14:00:00"` becomes `"2:00 PM"`.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTime` if the input is not a 24-hour time.
pub fn to_12_hour(raw: &str) -> ScheduleResult<String> {
    parse_24_hour(raw).map(format_12_hour)
}

/// ## Summary
/// Minutes since midnight for a time in either notation.
///
/// ## Errors
/// Returns `ScheduleError::InvalidTime` if the input cannot be parsed.
pub fn time_to_minutes(raw: &str) -> ScheduleResult<u32> {
    parse_time(raw).map(|time| time.hour() * 60 + time.minute())
}

/// Result of checking a start/end pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeRangeCheck {
    Valid,
    MissingStart,
    MissingEnd,
    StartNotBeforeEnd,
    Unparseable(String),
}

impl TimeRangeCheck {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Message shown next to the time inputs, `None` when valid.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::MissingStart => Some("Start time is required".to_string()),
            Self::MissingEnd => Some("End time is required".to_string()),
            Self::StartNotBeforeEnd => Some("End time must be after start time".to_string()),
            Self::Unparseable(raw) => Some(format!("Unrecognised time: {raw}")),
        }
    }
}

/// ## Summary
/// Checks that both endpoints are present and that start is strictly before end,
/// comparing minutes since midnight.
///
/// Blank strings count as missing. Either notation is accepted for each side.
#[must_use]
pub fn validate_time_range(start: Option<&str>, end: Option<&str>) -> TimeRangeCheck {
    let start = start.map(str::trim).filter(|s| !s.is_empty());
    let end = end.map(str::trim).filter(|s| !s.is_empty());

    let Some(start) = start else {
        return TimeRangeCheck::MissingStart;
    };
    let Some(end) = end else {
        return TimeRangeCheck::MissingEnd;
    };

    let (start_minutes, end_minutes) = match (time_to_minutes(start), time_to_minutes(end)) {
        (Ok(s), Ok(e)) => (s, e),
        (Err(_), _) => return TimeRangeCheck::Unparseable(start.to_string()),
        (_, Err(_)) => return TimeRangeCheck::Unparseable(end.to_string()),
    };

    if start_minutes >= end_minutes {
        TimeRangeCheck::StartNotBeforeEnd
    } else {
        TimeRangeCheck::Valid
    }
}

/// Splits `H:MM` or `H:MM:SS` into numeric parts.
fn split_clock(text: &str) -> Option<(u32, u32, u32)> {
    let mut parts = text.split(':');
    let hour = numeric(parts.next()?, 1..=2)?;
    let minute = numeric(parts.next()?, 2..=2)?;
    let second = match parts.next() {
        Some(part) => numeric(part, 2..=2)?,
        None => 0,
    };
    if parts.next().is_some() || minute > 59 || second > 59 {
        return None;
    }
    Some((hour, minute, second))
}

fn numeric(part: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests;
