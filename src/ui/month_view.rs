use chrono::{Datelike, NaiveDate, Weekday};

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekday_labels: Vec<&'static str>,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

/// A grid position. Positions before the first or after the last day of
/// the month are blank (`date: None`).
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: Option<NaiveDate>,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_cursor: bool,
    pub has_overrides: bool,
}

impl DayCell {
    pub fn new(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            is_cursor: false,
            has_overrides: false,
        }
    }

    pub fn blank() -> Self {
        Self::new(None)
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_cursor(mut self, cursor: bool) -> Self {
        self.is_cursor = cursor;
        self
    }

    pub fn with_overrides(mut self, has_overrides: bool) -> Self {
        self.has_overrides = has_overrides;
        self
    }
}

pub fn weekday_labels(week_start: Weekday) -> Vec<&'static str> {
    const LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    let offset = week_start.num_days_from_sunday() as usize;
    (0..7).map(|i| LABELS[(i + offset) % 7]).collect()
}

pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let displayed = state.board.current_month();
    let dates = state.board.dates_in_month();

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };

    if let Some(first_day) = dates.first() {
        let leading = (first_day.weekday().num_days_from_sunday() + 7
            - state.week_start.num_days_from_sunday())
            % 7;
        current_week.days.extend((0..leading).map(|_| DayCell::blank()));
    }

    for date in dates {
        let cell = DayCell::new(Some(date))
            .with_selected(state.board.is_selected(date))
            .with_today(date == state.today)
            .with_cursor(date == state.cursor)
            .with_overrides(state.board.store().entries_for(date) > 0);

        current_week.days.push(cell);

        if current_week.days.len() == 7 {
            weeks.push(current_week);
            current_week = Week { days: Vec::new() };
        }
    }

    if !current_week.days.is_empty() {
        current_week.days.resize(7, DayCell::blank());
        weeks.push(current_week);
    }

    MonthLayout {
        year: displayed.year(),
        month: displayed.month(),
        title: state.month_title(),
        weekday_labels: weekday_labels(state.week_start),
        weeks,
    }
}
