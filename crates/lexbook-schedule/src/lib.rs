//! Recurring weekly availability: weekday and repeat-rule models, the upcoming
//! date generator, and the 12/24-hour time helpers used by the availability wizard.

pub mod clock;
pub mod error;
pub mod export;
pub mod generator;
pub mod rule;
pub mod time;
pub mod weekday;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ScheduleError, ScheduleResult};
pub use generator::{SameDayPolicy, generate_upcoming_dates, upcoming_dates};
pub use rule::{RepeatInput, RepeatRule, RepeatSelection};
pub use time::{TimeRangeCheck, to_12_hour, to_24_hour, validate_time_range};
pub use weekday::DayOfWeek;
