//! RFC 5545 export of weekly slots, for handing availability to calendar clients.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rrule::{RRule, RRuleSet, Tz, Unvalidated};
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};
use crate::generator::first_occurrence;
use crate::rule::{DEFAULT_OCCURRENCES, MAX_WEEKS, RepeatRule};
use crate::weekday::DayOfWeek;

/// A weekly slot described the way calendar clients import it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarExport {
    /// `RRULE` value, without the `RRULE:` property name.
    pub rrule: String,
    /// Start of the first occurrence, in UTC.
    pub dtstart: NaiveDateTime,
    pub dates: Vec<NaiveDate>,
}

/// ## Summary
/// Renders the `RRULE` value for a weekly slot, e.g. `FREQ=WEEKLY;BYDAY=MO;COUNT=4`.
///
/// Week counts above 52 are clamped. `UNTIL` is the last second of the bound
/// date in UTC so that the bound itself is included.
///
/// ## Errors
/// Returns `ScheduleError::InvalidRepeatRule` for a zero week count.
pub fn rrule_text(day: DayOfWeek, rule: RepeatRule) -> ScheduleResult<String> {
    let bound = match rule {
        RepeatRule::Weeks(0) => {
            return Err(ScheduleError::InvalidRepeatRule(
                "cannot export a rule with zero weeks".to_string(),
            ));
        }
        RepeatRule::Weeks(count) => format!("COUNT={}", count.min(MAX_WEEKS)),
        RepeatRule::UntilDate(until) => {
            let end_of_day = until.and_time(last_second());
            format!("UNTIL={}", end_of_day.format("%Y%m%dT%H%M%SZ"))
        }
    };
    Ok(format!("FREQ=WEEKLY;BYDAY={};{bound}", day.ical_code()))
}

/// ## Summary
/// Builds a validated recurrence set starting at `dtstart`, treated as UTC.
///
/// `dtstart` should be the first occurrence of the slot; RFC 5545 counts
/// `DTSTART` as an instance even when it does not match `BYDAY`.
///
/// Unlike the generator, which yields no dates for an end date before the
/// first occurrence, such a rule has no valid RFC 5545 form and is rejected.
///
/// ## Errors
/// Returns `ScheduleError::InvalidRepeatRule` if an end date falls before
/// `dtstart`, and `ScheduleError::RRuleError` if the rule fails to parse or
/// validate.
pub fn to_rrule_set(
    day: DayOfWeek,
    rule: RepeatRule,
    dtstart: NaiveDateTime,
) -> ScheduleResult<RRuleSet> {
    if let RepeatRule::UntilDate(until) = rule
        && until < dtstart.date()
    {
        return Err(ScheduleError::InvalidRepeatRule(format!(
            "end date {until} is before the first occurrence on {}",
            dtstart.date()
        )));
    }

    let text = rrule_text(day, rule)?;
    tracing::trace!(rrule = %text, %dtstart, "Building recurrence set");

    let rrule = text
        .parse::<RRule<Unvalidated>>()
        .map_err(|err| ScheduleError::RRuleError(err.to_string()))?;
    let dt_start = Utc.from_utc_datetime(&dtstart).with_timezone(&Tz::UTC);
    rrule
        .build(dt_start)
        .map_err(|err| ScheduleError::RRuleError(err.to_string()))
}

/// ## Summary
/// Expands a recurrence set into at most `max_dates` calendar dates.
#[must_use]
pub fn expand_dates(set: &RRuleSet, max_dates: usize) -> Vec<NaiveDate> {
    let limit = u16::try_from(max_dates).unwrap_or(u16::MAX);
    set.clone()
        .all(limit)
        .dates
        .into_iter()
        .map(|dt| dt.date_naive())
        .collect()
}

/// ## Summary
/// Describes a weekly slot starting at `start` as an RFC 5545 recurrence.
///
/// The first occurrence is the next `day` on or after `today`. Without a rule
/// the slot covers the default four weeks. At most `max_dates` dates are listed.
///
/// ## Errors
/// Returns `ScheduleError::InvalidDate` if no occurrence can be computed, and
/// the errors of [`to_rrule_set`] for an unusable rule.
pub fn export_slot(
    day: DayOfWeek,
    rule: Option<RepeatRule>,
    start: NaiveTime,
    today: NaiveDate,
    max_dates: usize,
) -> ScheduleResult<CalendarExport> {
    let first = first_occurrence(today, day)
        .ok_or_else(|| ScheduleError::InvalidDate(format!("no {day} after {today}")))?;
    let rule = rule.unwrap_or_else(|| {
        RepeatRule::Weeks(u32::try_from(DEFAULT_OCCURRENCES).unwrap_or(MAX_WEEKS))
    });
    let dtstart = first.and_time(start);

    let set = to_rrule_set(day, rule, dtstart)?;
    Ok(CalendarExport {
        rrule: rrule_text(day, rule)?,
        dtstart,
        dates: expand_dates(&set, max_dates),
    })
}

fn last_second() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}
