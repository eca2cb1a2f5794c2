//! Repeat rules for weekly availability slots.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ScheduleError, ScheduleResult};

/// Upper bound on the number of weeks a `weeks` rule may span.
pub const MAX_WEEKS: u32 = 52;
/// Number of occurrences produced when no repeat rule is given.
pub const DEFAULT_OCCURRENCES: usize = 4;
/// Default cap on generated occurrences.
pub const DEFAULT_MAX_DATES: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How long a weekly slot keeps recurring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum RepeatRule {
    /// Repeat for this many consecutive weeks.
    Weeks(u32),
    /// Repeat every week up to and including this date.
    UntilDate(NaiveDate),
}

impl RepeatRule {
    /// ## Summary
    /// Checks the rule against the bounds the wizard enforces before submission.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRepeatRule` if a week count is outside
    /// `1..=52` or an end date is not strictly after `today`.
    pub fn validate(self, today: NaiveDate) -> ScheduleResult<()> {
        let problem = match self {
            Self::Weeks(count) => (!(1..=MAX_WEEKS).contains(&count))
                .then(|| format!("number of weeks must be between 1 and {MAX_WEEKS}")),
            Self::UntilDate(until) => {
                (until <= today).then(|| "end date must be after today".to_string())
            }
        };
        problem.map_or(Ok(()), |message| Err(ScheduleError::InvalidRepeatRule(message)))
    }

    /// ## Summary
    /// Human-readable summary, e.g. `"3 weeks"` or `"Until 12/31/2026"`.
    ///
    /// Week counts are clamped to 52 like the generated dates.
    #[must_use]
    pub fn summary(self) -> String {
        match self {
            Self::Weeks(count) => match count.min(MAX_WEEKS) {
                1 => "1 week".to_string(),
                count => format!("{count} weeks"),
            },
            Self::UntilDate(until) => format!("Until {}", until.format("%-m/%-d/%Y")),
        }
    }
}

impl fmt::Display for RepeatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Outcome of decoding the wizard's loosely typed `mode`/`value` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatSelection {
    /// No usable mode: fall back to the default number of occurrences.
    Default,
    Rule(RepeatRule),
    /// A recognised mode whose value cannot produce any occurrence.
    Unsatisfiable,
}

impl RepeatSelection {
    #[must_use]
    pub const fn rule(self) -> Option<RepeatRule> {
        match self {
            Self::Rule(rule) => Some(rule),
            Self::Default | Self::Unsatisfiable => None,
        }
    }
}

/// Repeat settings as they arrive from the wizard form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepeatInput {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
}

impl RepeatInput {
    #[must_use]
    pub fn weeks(count: u32) -> Self {
        Self {
            mode: Some("weeks".to_string()),
            value: Some(Value::from(count)),
        }
    }

    #[must_use]
    pub fn until(date: NaiveDate) -> Self {
        Self {
            mode: Some("until_date".to_string()),
            value: Some(Value::from(date.format(DATE_FORMAT).to_string())),
        }
    }

    /// ## Summary
    /// Decodes the form fields without failing.
    ///
    /// An absent or unknown `mode` selects the default. A `weeks` value that is
    /// not a non-negative whole number, or an `until_date` value that is not a
    /// `YYYY-MM-DD` date, is unsatisfiable.
    #[must_use]
    pub fn selection(&self) -> RepeatSelection {
        match self.parse_rule() {
            Ok(None) => RepeatSelection::Default,
            Ok(Some(rule)) => RepeatSelection::Rule(rule),
            Err(err) => {
                tracing::trace!(error = %err, "Repeat settings cannot produce dates");
                RepeatSelection::Unsatisfiable
            }
        }
    }

    /// ## Summary
    /// Decodes the form fields, reporting why a recognised mode is unusable.
    ///
    /// Returns `Ok(None)` for an absent or unknown `mode`.
    ///
    /// ## Errors
    /// Returns `ScheduleError::InvalidRepeatRule` if a `weeks` value is missing
    /// or not a non-negative whole number, and `ScheduleError::InvalidDate` if an
    /// `until_date` value is missing or not a `YYYY-MM-DD` date.
    pub fn parse_rule(&self) -> ScheduleResult<Option<RepeatRule>> {
        let Some(mode) = self.mode.as_deref().map(str::trim) else {
            return Ok(None);
        };

        if mode.eq_ignore_ascii_case("weeks") {
            self.value
                .as_ref()
                .and_then(week_count)
                .map(|count| Some(RepeatRule::Weeks(count)))
                .ok_or_else(|| {
                    ScheduleError::InvalidRepeatRule(format!(
                        "number of weeks must be a whole number, got {}",
                        self.describe_value()
                    ))
                })
        } else if mode.eq_ignore_ascii_case("until_date") {
            self.value
                .as_ref()
                .and_then(until_date)
                .map(|date| Some(RepeatRule::UntilDate(date)))
                .ok_or_else(|| ScheduleError::InvalidDate(self.describe_value()))
        } else {
            tracing::trace!(mode, "Unrecognised repeat mode, using default");
            Ok(None)
        }
    }

    fn describe_value(&self) -> String {
        self.value
            .as_ref()
            .map_or_else(|| "nothing".to_string(), Value::to_string)
    }
}

impl From<RepeatRule> for RepeatInput {
    fn from(rule: RepeatRule) -> Self {
        match rule {
            RepeatRule::Weeks(count) => Self::weeks(count),
            RepeatRule::UntilDate(date) => Self::until(date),
        }
    }
}

fn week_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .map(|count| u32::try_from(count).unwrap_or(u32::MAX))
            // Whole floats such as `4.0` display without a fraction.
            .or_else(|| number.as_f64()?.to_string().parse().ok()),
        Value::String(text) => text.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn until_date(value: &Value) -> Option<NaiveDate> {
    let text = value.as_str()?.trim();
    // Accept full ISO timestamps by keeping only the calendar date.
    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}
