use chrono::NaiveDate;

use super::month::{add_months, each_day_of_interval, end_of_month, start_of_month};

/// Tracks the month shown in the grid. Any day inside the month stands for
/// the whole month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarNavigator {
    displayed_month: NaiveDate,
}

impl CalendarNavigator {
    pub fn new(displayed_month: NaiveDate) -> Self {
        Self { displayed_month }
    }

    pub fn current_month(&self) -> NaiveDate {
        self.displayed_month
    }

    pub fn go_to_previous_month(&mut self) {
        self.shift(-1);
    }

    pub fn go_to_next_month(&mut self) {
        self.shift(1);
    }

    pub fn go_to_month(&mut self, date: NaiveDate) {
        self.displayed_month = date;
    }

    pub fn dates_in_month(&self) -> Vec<NaiveDate> {
        each_day_of_interval(
            start_of_month(self.displayed_month),
            end_of_month(self.displayed_month),
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        start_of_month(date) == start_of_month(self.displayed_month)
    }

    fn shift(&mut self, months: i32) {
        match add_months(self.displayed_month, months) {
            Some(date) => self.displayed_month = date,
            None => tracing::warn!(
                "Month navigation by {} from {} leaves the supported date range",
                months,
                self.displayed_month
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Months};
    use proptest::prelude::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn dates_in_march_2024_span_the_whole_month() {
        let navigator = CalendarNavigator::new(date(2024, 3, 18));
        let dates = navigator.dates_in_month();

        assert_eq!(dates.len(), 31);
        assert_eq!(dates.first(), Some(&date(2024, 3, 1)));
        assert_eq!(dates.last(), Some(&date(2024, 3, 31)));
    }

    #[test]
    fn next_month_moves_forward_one_month() {
        let mut navigator = CalendarNavigator::new(date(2024, 12, 10));
        navigator.go_to_next_month();
        assert_eq!(navigator.current_month(), date(2025, 1, 10));
    }

    #[test]
    fn previous_month_moves_back_one_month() {
        let mut navigator = CalendarNavigator::new(date(2024, 1, 10));
        navigator.go_to_previous_month();
        assert_eq!(navigator.current_month(), date(2023, 12, 10));
    }

    #[test]
    fn march_to_april_and_back_yields_same_dates() {
        let mut navigator = CalendarNavigator::new(date(2024, 3, 5));
        let original = navigator.dates_in_month();

        navigator.go_to_next_month();
        assert_eq!(navigator.dates_in_month().len(), 30);
        navigator.go_to_previous_month();

        assert_eq!(navigator.dates_in_month(), original);
    }

    #[test]
    fn round_trip_from_a_long_month_end_keeps_the_clamped_day() {
        let mut navigator = CalendarNavigator::new(date(2024, 1, 31));

        navigator.go_to_next_month();
        assert_eq!(navigator.current_month(), date(2024, 2, 29));
        navigator.go_to_previous_month();

        assert_eq!(navigator.current_month(), date(2024, 1, 29));
        assert!(navigator.contains(date(2024, 1, 31)));
    }

    #[test]
    fn navigation_saturates_at_the_end_of_time() {
        let mut navigator = CalendarNavigator::new(NaiveDate::MAX);
        navigator.go_to_next_month();
        assert_eq!(navigator.current_month(), NaiveDate::MAX);
    }

    #[test]
    fn contains_matches_any_day_of_displayed_month() {
        let navigator = CalendarNavigator::new(date(2024, 3, 5));
        assert!(navigator.contains(date(2024, 3, 31)));
        assert!(!navigator.contains(date(2024, 4, 1)));
    }

    proptest! {
        #[test]
        fn dates_in_month_cover_every_day_in_order(year in 1900i32..2200, month in 1u32..=12, day in 1u32..=28) {
            let navigator = CalendarNavigator::new(date(year, month, day));
            let dates = navigator.dates_in_month();
            let first = date(year, month, 1);
            let month_length = first.checked_add_months(Months::new(1)).unwrap().signed_duration_since(first).num_days();

            prop_assert_eq!(dates.len() as i64, month_length);
            prop_assert_eq!(dates[0], start_of_month(navigator.current_month()));
            prop_assert_eq!(*dates.last().unwrap(), end_of_month(navigator.current_month()));
            prop_assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(dates.iter().all(|d| d.month() == month));
        }

        #[test]
        fn next_then_previous_round_trips(year in 1900i32..2200, month in 1u32..=12, day in 1u32..=28) {
            let start = date(year, month, day);
            let mut navigator = CalendarNavigator::new(start);
            navigator.go_to_next_month();
            navigator.go_to_previous_month();
            prop_assert_eq!(navigator.current_month(), start);
        }
    }
}
