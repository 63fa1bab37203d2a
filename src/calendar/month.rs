use std::fmt::Write;

use chrono::{Datelike, Months, NaiveDate};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The day before the first of the following month. Only the last
/// representable month has no successor, and its final day is `NaiveDate::MAX`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next_month_first| next_month_first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Shifts `date` by `months`, clamping the day to the length of the target
/// month. Returns `None` outside chrono's representable range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Every day from `start` to `end` inclusive. Empty when `start > end`.
pub fn each_day_of_interval(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// Formats with a strftime pattern, falling back to ISO when the pattern
/// cannot be rendered.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format(ISO_DATE_FORMAT).to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn february_ends_on_the_29th_in_leap_years() {
        assert_eq!(end_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2000, 2, 1)), date(2000, 2, 29));
    }

    #[test]
    fn february_ends_on_the_28th_in_common_and_century_years() {
        assert_eq!(end_of_month(date(1900, 2, 1)), date(1900, 2, 28));
        assert_eq!(end_of_month(date(2023, 2, 28)), date(2023, 2, 28));
    }

    #[test]
    fn end_of_last_representable_month_is_max_date() {
        assert_eq!(end_of_month(NaiveDate::MAX), NaiveDate::MAX);
    }

    #[test]
    fn start_and_end_of_month_bracket_the_date() {
        let d = date(2024, 3, 17);
        assert_eq!(start_of_month(d), date(2024, 3, 1));
        assert_eq!(end_of_month(d), date(2024, 3, 31));
    }

    #[test]
    fn add_months_clamps_to_shorter_month() {
        assert_eq!(add_months(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(add_months(date(2023, 1, 31), 1), Some(date(2023, 2, 28)));
    }

    #[test]
    fn add_negative_months_crosses_year_boundary() {
        assert_eq!(add_months(date(2024, 1, 15), -1), Some(date(2023, 12, 15)));
        assert_eq!(add_months(date(2024, 3, 5), -14), Some(date(2023, 1, 5)));
    }

    #[test]
    fn add_months_past_max_date_returns_none() {
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
        assert_eq!(add_months(NaiveDate::MIN, -1), None);
    }

    #[test]
    fn each_day_of_interval_is_inclusive() {
        let days = each_day_of_interval(date(2024, 2, 27), date(2024, 3, 1));
        assert_eq!(
            days,
            vec![date(2024, 2, 27), date(2024, 2, 28), date(2024, 2, 29), date(2024, 3, 1)]
        );
    }

    #[test]
    fn each_day_of_reversed_interval_is_empty() {
        assert!(each_day_of_interval(date(2024, 3, 2), date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn format_date_uses_pattern() {
        assert_eq!(format_date(date(2024, 3, 5), "%Y-%m-%d"), "2024-03-05");
        assert_eq!(format_date(date(2024, 3, 5), "%B %Y"), "March 2024");
    }

    #[test]
    fn format_date_with_broken_pattern_falls_back_to_iso() {
        assert_eq!(format_date(date(2024, 3, 5), "%Q"), "2024-03-05");
    }

    proptest! {
        #[test]
        fn end_of_month_is_last_day(year in 1900i32..2200, month in 1u32..=12) {
            let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let end = end_of_month(first);
            let next_first = first.checked_add_months(Months::new(1)).unwrap();
            prop_assert_eq!(end, next_first.pred_opt().unwrap());
            prop_assert_eq!(end.month(), month);
            prop_assert_ne!(end.succ_opt().unwrap().month(), month);
        }
    }
}
