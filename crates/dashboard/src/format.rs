// File: crates/dashboard/src/format.rs
// Summary: Display formatting for numbers, shares, relative ages and report periods.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};
use num_format::{Locale, ToFormattedString};

pub use chart_core::geometry::fmt_num as number;

/// Round to a whole number and group in threes: `45000.0` -> `"45,000"`.
pub fn thousands(value: f64) -> String {
    // Rounding can produce -0; `as i64` folds it to 0.
    (value.round() as i64).to_formatted_string(&Locale::en)
}

/// `part` as a percentage of `whole`; zero when `whole` is not positive.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 && whole.is_finite() { part / whole * 100.0 } else { 0.0 }
}

/// Fixed-decimal display (`toFixed` style).
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit} ago") } else { format!("{n} {unit}s ago") }
}

/// Human age of an event: "Just now", "2 hours ago", "1 day ago", "1 week ago".
pub fn relative_age(age: TimeDelta) -> String {
    let minutes = age.num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    let hours = age.num_hours();
    let days = age.num_days();
    if hours < 1 {
        plural(minutes, "minute")
    } else if days < 1 {
        plural(hours, "hour")
    } else if days < 7 {
        plural(days, "day")
    } else if days < 30 {
        plural(days / 7, "week")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

/// Inclusive date range in report style: "Jun 1 - 30, 2025", "Apr 1 - Jun 30, 2025",
/// "Dec 1, 2024 - Jan 31, 2025".
pub fn report_period(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() != end.year() {
        format!("{} - {}", start.format("%b %-d, %Y"), end.format("%b %-d, %Y"))
    } else if start.month() != end.month() {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%-d, %Y"))
    }
}

/// "12:00" -> "12:00 PM". Labels that are not `HH:MM` are returned unchanged.
pub fn clock_12h(label: &str) -> String {
    match NaiveTime::parse_from_str(label, "%H:%M") {
        Ok(t) => t.format("%I:%M %p").to_string(),
        Err(_) => label.to_string(),
    }
}

/// Long date: "February 10, 2026".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_handles_short_and_negative_values() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(-1234.4), "-1,234");
        assert_eq!(thousands(-0.2), "0");
    }
}
