//! Countdown to the next anniversary occurrence.
//!
//! All arithmetic happens in UTC at whole-second granularity. The anniversary
//! "arrives" for a full calendar day: whenever today's month and day match the
//! anniversary's, every countdown component reads zero.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};

/// Time remaining until the next anniversary occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Month and day of `now` match the anniversary, regardless of year.
    pub is_anniversary_today: bool,
    /// Signed year difference; 0 during the first year, negative for a
    /// future-dated anniversary.
    pub years_passed: i32,
}

/// Computes the countdown from `now` to the next occurrence of `anniversary`.
#[must_use]
pub fn compute_countdown(anniversary: NaiveDate, now: DateTime<Utc>) -> Countdown {
    let today = now.date_naive();
    let is_anniversary_today =
        today.month() == anniversary.month() && today.day() == anniversary.day();
    let years_passed = today.year() - anniversary.year();

    if is_anniversary_today {
        return Countdown {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            is_anniversary_today,
            years_passed,
        };
    }

    let target = next_occurrence(anniversary, now);
    let remaining = (target - now).num_seconds();

    Countdown {
        days: remaining / 86_400,
        hours: remaining % 86_400 / 3_600,
        minutes: remaining % 3_600 / 60,
        seconds: remaining % 60,
        is_anniversary_today,
        years_passed,
    }
}

/// Midnight UTC of the next time the anniversary's month and day come around.
fn next_occurrence(anniversary: NaiveDate, now: DateTime<Utc>) -> DateTime<Utc> {
    let candidate = in_year(anniversary, now.year()).and_time(NaiveTime::MIN).and_utc();
    if candidate > now {
        candidate
    } else {
        in_year(anniversary, now.year() + 1).and_time(NaiveTime::MIN).and_utc()
    }
}

/// Projects the anniversary into `year`. Feb 29 rolls over to Mar 1 in
/// non-leap years.
fn in_year(anniversary: NaiveDate, year: i32) -> NaiveDate {
    anniversary
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(anniversary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec).single().expect("valid instant")
    }

    #[test]
    fn two_weeks_before_the_day() {
        let countdown = compute_countdown(date(2021, 8, 15), at(2024, 8, 1, 0, 0, 0));

        assert_eq!(countdown.days, 14);
        assert_eq!(countdown.hours, 0);
        assert_eq!(countdown.minutes, 0);
        assert_eq!(countdown.seconds, 0);
        assert!(!countdown.is_anniversary_today);
        assert_eq!(countdown.years_passed, 3);
    }

    #[test]
    fn the_whole_anniversary_day_reads_zero() {
        let countdown = compute_countdown(date(2021, 8, 15), at(2024, 8, 15, 9, 0, 0));

        assert!(countdown.is_anniversary_today);
        assert_eq!(countdown.days, 0);
        assert_eq!(countdown.hours, 0);
        assert_eq!(countdown.minutes, 0);
        assert_eq!(countdown.seconds, 0);
        assert_eq!(countdown.years_passed, 3);
    }

    #[test]
    fn seconds_granularity_before_midnight() {
        let countdown = compute_countdown(date(2021, 8, 15), at(2024, 8, 14, 23, 59, 30));

        assert_eq!(countdown.days, 0);
        assert_eq!(countdown.hours, 0);
        assert_eq!(countdown.minutes, 0);
        assert_eq!(countdown.seconds, 30);
        assert!(!countdown.is_anniversary_today);
    }

    #[test]
    fn day_after_rolls_to_next_year() {
        let countdown = compute_countdown(date(2021, 8, 15), at(2024, 8, 16, 0, 0, 0));

        // 2024-08-16 to 2025-08-15, no leap day in between.
        assert_eq!(countdown.days, 364);
        assert!(!countdown.is_anniversary_today);
    }

    #[test]
    fn feb_29_anniversary_rolls_to_mar_1_in_common_years() {
        let countdown = compute_countdown(date(2020, 2, 29), at(2021, 2, 20, 0, 0, 0));

        assert_eq!(countdown.days, 9);
        assert!(!countdown.is_anniversary_today);
        assert_eq!(countdown.years_passed, 1);
    }

    #[test]
    fn feb_29_matches_only_in_leap_years() {
        let countdown = compute_countdown(date(2020, 2, 29), at(2024, 2, 29, 12, 0, 0));

        assert!(countdown.is_anniversary_today);
        assert_eq!(countdown.years_passed, 4);
    }

    #[test]
    fn future_anniversary_counts_negative_years() {
        let countdown = compute_countdown(date(2030, 5, 1), at(2026, 1, 1, 0, 0, 0));

        assert_eq!(countdown.years_passed, -4);
        assert!(!countdown.is_anniversary_today);
        assert!(countdown.days > 0);
    }
}
