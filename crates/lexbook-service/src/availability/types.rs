//! Wire types exchanged with the availability backend.

use chrono::NaiveDate;
use lexbook_schedule::DayOfWeek;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/lawyer-availability/weekly`.
///
/// Times are 12-hour strings such as `"2:00 PM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlotRequest {
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub branch_id: i64,
    pub max_bookings: u32,
}

/// Bookable office location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// A date on which a lawyer is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityException {
    pub id: i64,
    #[serde(alias = "exception_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Body of `POST /availability/exceptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewException {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// List responses arrive either bare or wrapped in `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Listing<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> Listing<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { data: items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_weekly_slot_request_wire_shape() {
        let request = WeeklySlotRequest {
            day_of_week: DayOfWeek::Tuesday,
            start_time: "9:00 AM".to_string(),
            end_time: "12:30 PM".to_string(),
            branch_id: 3,
            max_bookings: 2,
        };
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({
                "day_of_week": "tuesday",
                "start_time": "9:00 AM",
                "end_time": "12:30 PM",
                "branch_id": 3,
                "max_bookings": 2
            })
        );
    }

    #[test]
    fn test_listing_accepts_both_shapes() {
        let bare: Listing<Branch> =
            serde_json::from_value(json!([{ "id": 1, "name": "Downtown" }])).expect("bare");
        assert_eq!(bare.into_vec().len(), 1);

        let wrapped: Listing<Branch> = serde_json::from_value(json!({
            "data": [{ "id": 1, "name": "Downtown" }, { "id": 2, "name": "Uptown", "address": "1 Main St" }]
        }))
        .expect("wrapped");
        let branches = wrapped.into_vec();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[1].address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn test_exception_accepts_backend_alias() {
        let exception: AvailabilityException = serde_json::from_value(json!({
            "id": 9,
            "exception_date": "2026-12-25",
            "reason": "Holiday"
        }))
        .expect("deserialize");
        assert_eq!(exception.date, NaiveDate::from_ymd_opt(2026, 12, 25).expect("valid date"));
    }
}
