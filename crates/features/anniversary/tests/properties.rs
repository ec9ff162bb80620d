use amora_anniversary::{compute_countdown, compute_duration};
use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

proptest! {
    #[test]
    fn countdown_components_stay_in_range(
        ann_year in 1990i32..2030,
        ann_month in 1u32..=12,
        ann_day in 1u32..=28,
        now_year in 2020i32..2035,
        now_month in 1u32..=12,
        now_day in 1u32..=28,
        secs in 0u32..86_400,
    ) {
        let anniversary = date(ann_year, ann_month, ann_day);
        let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).expect("valid time");
        let now = date(now_year, now_month, now_day).and_time(time).and_utc();

        let countdown = compute_countdown(anniversary, now);

        prop_assert!((0..=366).contains(&countdown.days));
        prop_assert!((0..24).contains(&countdown.hours));
        prop_assert!((0..60).contains(&countdown.minutes));
        prop_assert!((0..60).contains(&countdown.seconds));
        prop_assert_eq!(countdown.years_passed, now_year - ann_year);

        let on_the_day = now_month == ann_month && now_day == ann_day;
        prop_assert_eq!(countdown.is_anniversary_today, on_the_day);
        if on_the_day {
            prop_assert_eq!(
                (countdown.days, countdown.hours, countdown.minutes, countdown.seconds),
                (0, 0, 0, 0)
            );
        }
    }

    #[test]
    fn duration_components_are_calendar_sane(
        start_year in 1990i32..2024,
        start_month in 1u32..=12,
        start_day in 1u32..=28,
        now_year in 2024i32..2035,
        now_month in 1u32..=12,
        now_day in 1u32..=28,
    ) {
        let start = date(start_year, start_month, start_day);
        let now = date(now_year, now_month, now_day);

        let duration = compute_duration(start, now);

        prop_assert!(duration.years >= 0);
        prop_assert!((0..12).contains(&duration.months));
        prop_assert!((0..31).contains(&duration.days));
        prop_assert!(!duration.formatted.is_empty());

        if (duration.years, duration.months, duration.days) == (0, 0, 0) {
            prop_assert_eq!(&duration.formatted, "0 days");
        }
    }
}
