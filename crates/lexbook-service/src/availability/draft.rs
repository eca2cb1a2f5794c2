//! In-memory state of the availability wizard and its derived backend request.

use chrono::NaiveDate;
use lexbook_schedule::generator::{generate_upcoming_dates, upcoming_dates};
use lexbook_schedule::time::{format_12_hour, parse_time};
use lexbook_schedule::{DayOfWeek, RepeatInput, RepeatRule, validate_time_range};
use serde::{Deserialize, Serialize};

use super::types::WeeklySlotRequest;
use crate::error::{ServiceError, ServiceResult};

fn default_max_bookings() -> u32 {
    1
}

/// Fields collected by the wizard before a weekly slot is submitted.
///
/// Times may be in either 12-hour or 24-hour notation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityDraft {
    pub day_of_week: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(default = "default_max_bookings")]
    pub max_bookings: u32,
    #[serde(default)]
    pub repeat: RepeatInput,
}

/// Preview rendered by the wizard's confirmation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPreview {
    pub dates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// ## Summary
/// Builds the occurrence preview for raw wizard input.
///
/// Shares the generator's fail-soft behaviour: bad input gives an empty list.
#[must_use]
pub fn preview(
    day_of_week: &str,
    repeat: &RepeatInput,
    max_dates: usize,
    today: NaiveDate,
) -> SlotPreview {
    SlotPreview {
        dates: generate_upcoming_dates(day_of_week, repeat, max_dates, today),
        summary: repeat.selection().rule().map(RepeatRule::summary),
    }
}

impl AvailabilityDraft {
    /// ## Summary
    /// Previews the occurrences this draft would produce.
    #[must_use]
    pub fn preview(&self, today: NaiveDate, max_dates: usize) -> SlotPreview {
        preview(&self.day_of_week, &self.repeat, max_dates, today)
    }

    /// ## Summary
    /// Validates the draft and derives the request sent to the backend.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` when the weekday is unknown, the
    /// time range is missing or not increasing, no branch is chosen, or
    /// `max_bookings` is zero, or the repeat rule yields no date at all.
    /// Returns `ServiceError::ScheduleError` when the repeat value cannot be
    /// decoded or the rule is out of bounds for `today`.
    pub fn to_request(&self, today: NaiveDate) -> ServiceResult<WeeklySlotRequest> {
        let day_of_week = DayOfWeek::parse_lenient(&self.day_of_week).ok_or_else(|| {
            ServiceError::ValidationError(format!("unknown day of week: {}", self.day_of_week))
        })?;

        let check = validate_time_range(self.start_time.as_deref(), self.end_time.as_deref());
        if let Some(message) = check.message() {
            return Err(ServiceError::ValidationError(message));
        }

        let branch_id = self
            .branch_id
            .ok_or_else(|| ServiceError::ValidationError("branch is required".to_string()))?;

        if self.max_bookings == 0 {
            return Err(ServiceError::ValidationError(
                "max bookings must be at least 1".to_string(),
            ));
        }

        if let Some(rule) = self.repeat.parse_rule()? {
            rule.validate(today)?;
            if upcoming_dates(day_of_week, Some(rule), 1, today).is_empty() {
                return Err(ServiceError::ValidationError(format!(
                    "end date is before the next {day_of_week}"
                )));
            }
        }

        Ok(WeeklySlotRequest {
            day_of_week,
            start_time: twelve_hour(self.start_time.as_deref())?,
            end_time: twelve_hour(self.end_time.as_deref())?,
            branch_id,
            max_bookings: self.max_bookings,
        })
    }
}

fn twelve_hour(raw: Option<&str>) -> ServiceResult<String> {
    let raw = raw.unwrap_or_default();
    Ok(format_12_hour(parse_time(raw)?))
}
