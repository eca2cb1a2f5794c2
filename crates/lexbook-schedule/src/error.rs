use thiserror::Error;

/// Scheduling parse and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid repeat rule: {0}")]
    InvalidRepeatRule(String),

    #[error("RRule error: {0}")]
    RRuleError(String),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
