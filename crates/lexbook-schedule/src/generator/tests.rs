//! Tests for upcoming occurrence generation.

use super::*;
use crate::clock::FixedClock;
use chrono::{Datelike, NaiveDate};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Friday 2026-10-16.
fn friday() -> NaiveDate {
    date(2026, 10, 16)
}

fn assert_weekly(dates: &[NaiveDate], day: DayOfWeek) {
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 7, "dates {pair:?} not a week apart");
    }
    for d in dates {
        assert!(day.matches(*d), "{d} is not a {day}");
    }
}

#[test]
fn test_first_occurrence_includes_today() {
    assert_eq!(first_occurrence(friday(), DayOfWeek::Friday), Some(friday()));
    assert_eq!(
        first_occurrence(friday(), DayOfWeek::Thursday),
        Some(date(2026, 10, 22))
    );
    assert_eq!(
        first_occurrence(friday(), DayOfWeek::Saturday),
        Some(date(2026, 10, 17))
    );
}

#[test]
fn test_first_occurrence_never_more_than_six_days_out() {
    for offset in 0..14 {
        let from = friday() + chrono::Days::new(offset);
        for day in DayOfWeek::ALL {
            let first = first_occurrence(from, day).expect("occurrence exists");
            let gap = (first - from).num_days();
            assert!((0..=6).contains(&gap), "gap {gap} for {day} from {from}");
        }
    }
}

#[test_log::test]
fn test_monday_four_weeks() {
    let dates = upcoming_dates(
        DayOfWeek::Monday,
        Some(RepeatRule::Weeks(4)),
        10,
        friday(),
    );
    assert_eq!(
        dates,
        vec![
            date(2026, 10, 19),
            date(2026, 10, 26),
            date(2026, 11, 2),
            date(2026, 11, 9),
        ]
    );
}

#[test]
fn test_weeks_count_is_min_of_value_cap_and_52() {
    for day in DayOfWeek::ALL {
        for (weeks, max_dates) in [(1, 10), (4, 10), (12, 5), (52, 100), (80, 100), (80, 60)] {
            let dates = upcoming_dates(day, Some(RepeatRule::Weeks(weeks)), max_dates, friday());
            let expected = usize::try_from(weeks.min(52))
                .expect("fits")
                .min(max_dates);
            assert_eq!(dates.len(), expected, "{day} weeks={weeks} max={max_dates}");
            assert_weekly(&dates, day);
        }
    }
}

#[test]
fn test_zero_weeks_is_empty() {
    assert!(upcoming_dates(DayOfWeek::Monday, Some(RepeatRule::Weeks(0)), 10, friday()).is_empty());
}

#[test]
fn test_default_is_four_occurrences() {
    let dates = upcoming_dates(DayOfWeek::Tuesday, None, 10, friday());
    assert_eq!(dates.len(), 4);
    assert_eq!(dates[0], date(2026, 10, 20));
    assert_weekly(&dates, DayOfWeek::Tuesday);

    assert_eq!(upcoming_dates(DayOfWeek::Tuesday, None, 2, friday()).len(), 2);
}

#[test]
fn test_until_date_is_inclusive() {
    let rule = RepeatRule::UntilDate(date(2026, 11, 13));
    let dates = upcoming_dates(DayOfWeek::Friday, Some(rule), 10, friday());
    assert_eq!(
        dates,
        vec![
            date(2026, 10, 16),
            date(2026, 10, 23),
            date(2026, 10, 30),
            date(2026, 11, 6),
            date(2026, 11, 13),
        ]
    );
}

#[test]
fn test_until_date_respects_cap_and_bound() {
    let bound = date(2027, 6, 30);
    for day in DayOfWeek::ALL {
        for max_dates in [1, 5, 10, 200] {
            let dates = upcoming_dates(day, Some(RepeatRule::UntilDate(bound)), max_dates, friday());
            assert!(dates.len() <= max_dates);
            assert!(dates.iter().all(|d| *d <= bound));
            assert_weekly(&dates, day);
        }
    }
}

#[test]
fn test_until_date_count_matches_weeks_in_range() {
    // Fridays from 2026-10-16 through 2027-01-01 inclusive.
    let rule = RepeatRule::UntilDate(date(2027, 1, 1));
    let dates = upcoming_dates(DayOfWeek::Friday, Some(rule), 100, friday());
    assert_eq!(dates.len(), 12);
    assert_eq!(dates.last().copied(), Some(date(2027, 1, 1)));
}

#[test]
fn test_until_before_first_occurrence_is_empty() {
    // Next Wednesday is 2026-10-21.
    let rule = RepeatRule::UntilDate(date(2026, 10, 20));
    assert!(upcoming_dates(DayOfWeek::Wednesday, Some(rule), 10, friday()).is_empty());

    let past = RepeatRule::UntilDate(date(2025, 1, 1));
    assert!(upcoming_dates(DayOfWeek::Friday, Some(past), 10, friday()).is_empty());
}

#[test]
fn test_zero_max_dates_is_empty() {
    assert!(upcoming_dates(DayOfWeek::Monday, Some(RepeatRule::Weeks(4)), 0, friday()).is_empty());
}

#[test]
fn test_crosses_year_and_leap_day() {
    let dates = upcoming_dates(
        DayOfWeek::Thursday,
        Some(RepeatRule::Weeks(3)),
        10,
        date(2028, 2, 22),
    );
    assert_eq!(
        dates,
        vec![date(2028, 2, 24), date(2028, 3, 2), date(2028, 3, 9)]
    );

    let dates = upcoming_dates(DayOfWeek::Sunday, Some(RepeatRule::Weeks(2)), 10, date(2026, 12, 30));
    assert_eq!(dates, vec![date(2027, 1, 3), date(2027, 1, 10)]);
    assert_eq!(dates[0].year(), 2027);
}

#[test]
fn test_generate_strings_for_monday() {
    let dates = generate_upcoming_dates("Monday", &RepeatInput::weeks(4), 10, friday());
    assert_eq!(
        dates,
        vec!["2026-10-19", "2026-10-26", "2026-11-02", "2026-11-09"]
    );
}

#[test]
fn test_generate_invalid_day_is_empty_for_every_mode() {
    let inputs = [
        RepeatInput::default(),
        RepeatInput::weeks(4),
        RepeatInput::until(date(2026, 12, 31)),
    ];
    for input in inputs {
        assert!(generate_upcoming_dates("invalidday", &input, 10, friday()).is_empty());
    }
}

#[test]
fn test_generate_unknown_mode_falls_back_to_default() {
    let input = RepeatInput {
        mode: Some("monthly".to_string()),
        value: Some(json!(3)),
    };
    assert_eq!(generate_upcoming_dates("saturday", &input, 10, friday()).len(), 4);
    assert_eq!(generate_upcoming_dates("saturday", &RepeatInput::default(), 3, friday()).len(), 3);
}

#[test]
fn test_generate_unsatisfiable_is_empty() {
    let input = RepeatInput {
        mode: Some("until_date".to_string()),
        value: Some(json!("not a date")),
    };
    assert!(generate_upcoming_dates("monday", &input, 10, friday()).is_empty());
}

#[test]
fn test_generate_is_idempotent_for_same_day() {
    let input = RepeatInput::until(date(2027, 3, 1));
    let first = generate_upcoming_dates("wednesday", &input, 10, friday());
    let second = generate_upcoming_dates("wednesday", &input, 10, friday());
    assert_eq!(first, second);
}

#[test]
fn test_same_day_policy_include_keeps_today() {
    let late = friday().and_hms_opt(23, 59, 0).expect("valid time");
    assert_eq!(SameDayPolicy::Include.anchor(late), friday());
}

#[test]
fn test_same_day_policy_cutoff_skips_today() {
    let cutoff = NaiveTime::from_hms_opt(17, 0, 0).expect("valid time");
    let policy = SameDayPolicy::from_cutoff(Some(cutoff));

    let morning = FixedClock(friday().and_hms_opt(9, 0, 0).expect("valid time"));
    let evening = FixedClock(friday().and_hms_opt(17, 0, 0).expect("valid time"));

    assert_eq!(policy.anchor_from(&morning), friday());
    assert_eq!(policy.anchor_from(&evening), date(2026, 10, 17));

    let dates = upcoming_dates(DayOfWeek::Friday, None, 10, policy.anchor_from(&evening));
    assert_eq!(dates.first().copied(), Some(date(2026, 10, 23)));
}

#[test]
fn test_from_cutoff_none_is_include() {
    assert_eq!(SameDayPolicy::from_cutoff(None), SameDayPolicy::Include);
}
