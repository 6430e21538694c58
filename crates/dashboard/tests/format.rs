// File: crates/dashboard/tests/format.rs
// Purpose: Number, percentage, age and period formatting.

use chrono::{NaiveDate, TimeDelta};
use waterflow_dashboard::format::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn thousands_separators() {
    assert_eq!(thousands(45_000.0), "45,000");
    assert_eq!(thousands(7_500.0), "7,500");
    assert_eq!(thousands(1_234_567.6), "1,234,568");
}

#[test]
fn percent_guards_zero_whole() {
    assert_eq!(percent_of(10.0, 0.0), 0.0);
    assert_eq!(fixed(percent_of(10.0, 245.5), 1), "4.1");
    assert_eq!(fixed(percent_of(5.0, 245.5), 1), "2.0");
}

#[test]
fn numbers_drop_trailing_zeros() {
    assert_eq!(number(2450.0), "2450");
    assert_eq!(number(245.5), "245.5");
}

#[test]
fn relative_ages() {
    assert_eq!(relative_age(TimeDelta::seconds(20)), "Just now");
    assert_eq!(relative_age(TimeDelta::minutes(5)), "5 minutes ago");
    assert_eq!(relative_age(TimeDelta::hours(1)), "1 hour ago");
    assert_eq!(relative_age(TimeDelta::hours(5)), "5 hours ago");
    assert_eq!(relative_age(TimeDelta::days(1)), "1 day ago");
    assert_eq!(relative_age(TimeDelta::days(3)), "3 days ago");
    assert_eq!(relative_age(TimeDelta::weeks(1)), "1 week ago");
    assert_eq!(relative_age(TimeDelta::days(30)), "1 month ago");
    assert_eq!(relative_age(TimeDelta::days(800)), "2 years ago");
}

#[test]
fn report_periods() {
    assert_eq!(report_period(date(2025, 6, 1), date(2025, 6, 30)), "Jun 1 - 30, 2025");
    assert_eq!(report_period(date(2025, 4, 1), date(2025, 6, 30)), "Apr 1 - Jun 30, 2025");
    assert_eq!(report_period(date(2024, 12, 1), date(2025, 1, 31)), "Dec 1, 2024 - Jan 31, 2025");
}

#[test]
fn clock_and_long_dates() {
    assert_eq!(clock_12h("12:00"), "12:00 PM");
    assert_eq!(clock_12h("00:00"), "12:00 AM");
    assert_eq!(clock_12h("noon"), "noon");
    assert_eq!(long_date(date(2026, 2, 10)), "February 10, 2026");
}
