//! Elapsed calendar time between two dates, in human units.

use chrono::{Datelike, NaiveDate};

/// Elapsed time between two dates, decomposed into calendar components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSince {
    pub years: i32,
    pub months: i32,
    pub days: i32,
    /// Non-zero components joined with ", ", e.g. `1 year, 11 months, 26 days`.
    /// `0 days` when the dates coincide.
    pub formatted: String,
}

/// Computes the calendar distance from `start` to `now`.
///
/// Component arithmetic borrows like written subtraction: a negative day count
/// borrows a month (adding the day-count of the month immediately preceding
/// `now`'s), and a negative month count borrows a year.
#[must_use]
pub fn compute_duration(start: NaiveDate, now: NaiveDate) -> DurationSince {
    let mut years = now.year() - start.year();
    let mut months = now.month() as i32 - start.month() as i32;
    let mut days = now.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        days += days_in_preceding_month(now);
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    DurationSince { years, months, days, formatted: format_components(years, months, days) }
}

fn format_components(years: i32, months: i32, days: i32) -> String {
    let mut parts = Vec::with_capacity(3);
    if years > 0 {
        parts.push(pluralize(years, "year"));
    }
    if months > 0 {
        parts.push(pluralize(months, "month"));
    }
    if days > 0 {
        parts.push(pluralize(days, "day"));
    }

    if parts.is_empty() { "0 days".to_owned() } else { parts.join(", ") }
}

fn pluralize(count: i32, unit: &str) -> String {
    if count == 1 { format!("1 {unit}") } else { format!("{count} {unit}s") }
}

/// Day-count of the month immediately preceding `now`'s month.
fn days_in_preceding_month(now: NaiveDate) -> i32 {
    let (year, month) = if now.month() == 1 {
        (now.year() - 1, 12)
    } else {
        (now.year(), now.month() - 1)
    };

    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => (next - first).num_days() as i32,
        // Unreachable for valid (year, month) pairs.
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn whole_years_only() {
        let duration = compute_duration(date(2021, 8, 15), date(2023, 8, 15));

        assert_eq!((duration.years, duration.months, duration.days), (2, 0, 0));
        assert_eq!(duration.formatted, "2 years");
    }

    #[test]
    fn borrows_across_month_and_year() {
        let duration = compute_duration(date(2021, 8, 15), date(2023, 8, 10));

        assert_eq!((duration.years, duration.months, duration.days), (1, 11, 26));
        assert_eq!(duration.formatted, "1 year, 11 months, 26 days");
    }

    #[test]
    fn same_date_is_zero_days() {
        let duration = compute_duration(date(2021, 8, 15), date(2021, 8, 15));

        assert_eq!((duration.years, duration.months, duration.days), (0, 0, 0));
        assert_eq!(duration.formatted, "0 days");
    }

    #[test]
    fn day_borrow_uses_preceding_month_length() {
        // Preceding month is February 2024 (leap): 29 days. 1 + 29 - 15 = 15.
        let duration = compute_duration(date(2024, 2, 15), date(2024, 3, 1));

        assert_eq!((duration.years, duration.months, duration.days), (0, 0, 15));
        assert_eq!(duration.formatted, "15 days");
    }

    #[test]
    fn january_borrows_from_december() {
        let duration = compute_duration(date(2023, 12, 20), date(2024, 1, 10));

        // December has 31 days: 10 + 31 - 20 = 21.
        assert_eq!((duration.years, duration.months, duration.days), (0, 0, 21));
        assert_eq!(duration.formatted, "21 days");
    }

    #[test]
    fn singular_units_read_naturally() {
        let duration = compute_duration(date(2023, 7, 14), date(2024, 8, 15));

        assert_eq!((duration.years, duration.months, duration.days), (1, 1, 1));
        assert_eq!(duration.formatted, "1 year, 1 month, 1 day");
    }
}
