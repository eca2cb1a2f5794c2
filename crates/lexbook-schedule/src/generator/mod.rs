//! Upcoming occurrence generation for weekly availability slots.
//!
//! All functions take the anchor date explicitly; callers obtain it from a
//! [`Clock`] so that generation stays deterministic under test.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::clock::Clock;
use crate::rule::{DEFAULT_OCCURRENCES, MAX_WEEKS, RepeatInput, RepeatRule, RepeatSelection};
use crate::weekday::DayOfWeek;

const ONE_WEEK: Days = Days::new(7);

/// Whether today counts as an occurrence when it falls on the slot's weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameDayPolicy {
    /// Today is always eligible, whatever the time of day.
    #[default]
    Include,
    /// Today is skipped once the local time reaches the cutoff.
    CutoffAt(NaiveTime),
}

impl SameDayPolicy {
    /// ## Summary
    /// Builds the policy from an optional cutoff.
    #[must_use]
    pub fn from_cutoff(cutoff: Option<NaiveTime>) -> Self {
        cutoff.map_or(Self::Include, Self::CutoffAt)
    }

    /// ## Summary
    /// Returns the first date that may hold an occurrence, given the local time.
    #[must_use]
    pub fn anchor(self, now: NaiveDateTime) -> NaiveDate {
        match self {
            Self::CutoffAt(cutoff) if now.time() >= cutoff => {
                now.date().succ_opt().unwrap_or(now.date())
            }
            Self::Include | Self::CutoffAt(_) => now.date(),
        }
    }

    /// Anchor date read from `clock`.
    #[must_use]
    pub fn anchor_from(self, clock: &dyn Clock) -> NaiveDate {
        self.anchor(clock.now())
    }
}

/// ## Summary
/// Returns the first date on or after `from` that falls on `day`.
///
/// Steps forward one day at a time, at most six steps.
#[must_use]
pub fn first_occurrence(from: NaiveDate, day: DayOfWeek) -> Option<NaiveDate> {
    let mut current = from;
    while !day.matches(current) {
        current = current.succ_opt()?;
    }
    Some(current)
}

/// ## Summary
/// Generates the weekly occurrences of `day`, earliest first, starting from
/// the next occurrence on or after `today`.
///
/// * `None` produces the next four occurrences.
/// * `Weeks(n)` produces `min(n, 52)` occurrences.
/// * `UntilDate(d)` produces occurrences up to and including `d`, and nothing
///   if `d` falls before the first occurrence.
///
/// The result never holds more than `max_dates` entries. Rule bounds are not
/// validated here; see [`RepeatRule::validate`].
#[must_use]
pub fn upcoming_dates(
    day: DayOfWeek,
    rule: Option<RepeatRule>,
    max_dates: usize,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    let Some(first) = first_occurrence(today, day) else {
        return Vec::new();
    };

    let (limit, until) = match rule {
        None => (DEFAULT_OCCURRENCES, None),
        Some(RepeatRule::Weeks(count)) => (
            usize::try_from(count.min(MAX_WEEKS)).unwrap_or(usize::MAX),
            None,
        ),
        Some(RepeatRule::UntilDate(until)) => (usize::MAX, Some(until)),
    };
    let limit = limit.min(max_dates);

    tracing::trace!(%day, %first, limit, ?until, "Generating weekly occurrences");

    let mut dates = Vec::new();
    let mut current = Some(first);
    while let Some(date) = current {
        if dates.len() >= limit || until.is_some_and(|bound| date > bound) {
            break;
        }
        dates.push(date);
        current = date.checked_add_days(ONE_WEEK);
    }
    dates
}

/// ## Summary
/// Generates `YYYY-MM-DD` occurrence strings from raw wizard input.
///
/// Never fails: an unrecognised weekday or an unusable repeat value yields an
/// empty list, and a missing or unknown repeat mode yields the default
/// four occurrences.
#[must_use]
pub fn generate_upcoming_dates(
    day_of_week: &str,
    repeat: &RepeatInput,
    max_dates: usize,
    today: NaiveDate,
) -> Vec<String> {
    let Some(day) = DayOfWeek::parse_lenient(day_of_week) else {
        tracing::debug!(day_of_week, "Unrecognised weekday, no dates generated");
        return Vec::new();
    };

    let dates = match repeat.selection() {
        RepeatSelection::Default => upcoming_dates(day, None, max_dates, today),
        RepeatSelection::Rule(rule) => upcoming_dates(day, Some(rule), max_dates, today),
        RepeatSelection::Unsatisfiable => Vec::new(),
    };
    format_dates(&dates)
}

/// Formats dates as `YYYY-MM-DD`.
#[must_use]
pub fn format_dates(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

#[cfg(test)]
mod tests;
