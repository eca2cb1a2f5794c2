//! Tests for time-of-day conversion and range checks.

use super::*;

#[test]
fn test_to_24_hour_meridiem_boundaries() {
    assert_eq!(to_24_hour("12:00 AM").expect("midnight"), "00:00:00");
    assert_eq!(to_24_hour("12:45 AM").expect("after midnight"), "00:45:00");
    assert_eq!(to_24_hour("12:00 PM").expect("noon"), "12:00:00");
    assert_eq!(to_24_hour("1:00 PM").expect("afternoon"), "13:00:00");
    assert_eq!(to_24_hour("2:00 PM").expect("afternoon"), "14:00:00");
    assert_eq!(to_24_hour("11:59 PM").expect("late"), "23:59:00");
    assert_eq!(to_24_hour("9:05 AM").expect("morning"), "09:05:00");
}

#[test]
fn test_to_24_hour_accepts_loose_spelling() {
    assert_eq!(to_24_hour("02:30pm").expect("no space"), "14:30:00");
    assert_eq!(to_24_hour(" 7:15 am ").expect("padded"), "07:15:00");
    assert_eq!(to_24_hour("10:20:30 PM").expect("seconds"), "22:20:30");
}

#[test]
fn test_to_24_hour_rejects_malformed() {
    for raw in ["", "PM", "14:00", "0:30 AM", "13:00 PM", "2:5 PM", "2:60 PM", "2:00 XM", "2:00:00:00 PM"] {
        assert!(to_24_hour(raw).is_err(), "{raw:?} should be rejected");
    }
}

#[test]
fn test_to_12_hour() {
    assert_eq!(to_12_hour("14:00:00").expect("afternoon"), "2:00 PM");
    assert_eq!(to_12_hour("00:00:00").expect("midnight"), "12:00 AM");
    assert_eq!(to_12_hour("12:00:00").expect("noon"), "12:00 PM");
    assert_eq!(to_12_hour("09:30").expect("no seconds"), "9:30 AM");
    assert_eq!(to_12_hour("23:05:09").expect("seconds"), "11:05:09 PM");
}

#[test]
fn test_to_12_hour_rejects_malformed() {
    for raw in ["24:00:00", "7", "ab:cd", "12:00 PM", "-1:00:00"] {
        assert!(to_12_hour(raw).is_err(), "{raw:?} should be rejected");
    }
}

#[test]
fn test_round_trip_every_minute_and_some_seconds() {
    for hour in 0..24 {
        for minute in 0..60 {
            for second in [0, 1, 30, 59] {
                let original = format!("{hour:02}:{minute:02}:{second:02}");
                let twelve = to_12_hour(&original).expect("well-formed");
                assert_eq!(to_24_hour(&twelve).expect("converted back"), original);
            }
        }
    }
}

#[test]
fn test_time_to_minutes() {
    assert_eq!(time_to_minutes("00:00:00").expect("midnight"), 0);
    assert_eq!(time_to_minutes("14:30:00").expect("24h"), 870);
    assert_eq!(time_to_minutes("2:30 PM").expect("12h"), 870);
    assert_eq!(time_to_minutes("12:15 AM").expect("12h"), 15);
    assert!(time_to_minutes("later").is_err());
}

#[test_log::test]
fn test_validate_time_range() {
    assert_eq!(
        validate_time_range(Some("9:00 AM"), Some("5:00 PM")),
        TimeRangeCheck::Valid
    );
    assert_eq!(
        validate_time_range(Some("09:00:00"), Some("09:01:00")),
        TimeRangeCheck::Valid
    );
    assert_eq!(
        validate_time_range(Some("5:00 PM"), Some("9:00 AM")),
        TimeRangeCheck::StartNotBeforeEnd
    );
    assert_eq!(
        validate_time_range(Some("14:00:00"), Some("2:00 PM")),
        TimeRangeCheck::StartNotBeforeEnd
    );
}

#[test]
fn test_validate_time_range_missing_and_unparseable() {
    assert_eq!(validate_time_range(None, Some("5:00 PM")), TimeRangeCheck::MissingStart);
    assert_eq!(validate_time_range(Some("  "), Some("5:00 PM")), TimeRangeCheck::MissingStart);
    assert_eq!(validate_time_range(Some("9:00 AM"), None), TimeRangeCheck::MissingEnd);
    assert_eq!(
        validate_time_range(Some("9:00 AM"), Some("noonish")),
        TimeRangeCheck::Unparseable("noonish".to_string())
    );

    let check = validate_time_range(Some("10:00 AM"), Some("10:00 AM"));
    assert!(!check.is_valid());
    assert_eq!(
        check.message().as_deref(),
        Some("End time must be after start time")
    );
    assert!(TimeRangeCheck::Valid.message().is_none());
}

#[test]
fn test_validate_matches_minute_ordering() {
    let samples = ["00:00:00", "06:15:00", "11:59:00", "12:00:00", "13:30:00", "23:59:00"];
    for start in samples {
        for end in samples {
            let expected = time_to_minutes(start).expect("start") < time_to_minutes(end).expect("end");
            assert_eq!(
                validate_time_range(Some(start), Some(end)).is_valid(),
                expected,
                "{start} -> {end}"
            );
        }
    }
}
