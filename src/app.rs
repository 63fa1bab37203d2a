use chrono::{Days, Local, NaiveDate, Weekday};

use crate::availability::SlotScope;
use crate::board::AvailabilityBoard;
use crate::calendar::Period;
use crate::calendar::month::{add_months, format_date, start_of_month};
use crate::storage::config::{Config, ConfigError};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Calendar,
    Editor,
    Command,
}

/// One focusable line of the availability editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorRow {
    HalfDay(Period),
    Slot(Period, usize),
    Cancel,
}

/// Interactive session state wrapped around the board: where the grid
/// cursor sits, which editor row has focus, and how things are drawn.
pub struct AppState {
    pub mode: Mode,
    pub board: AvailabilityBoard,
    pub today: NaiveDate,
    pub cursor: NaiveDate,
    pub editor_focus: usize,
    pub week_start: Weekday,
    pub title_date_format: String,
    pub month_title_format: String,
    pub theme: Theme,
    pub show_help: bool,
    pub help_scroll: usize,
    pub command_buffer: String,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive())
    }

    pub fn starting_on(today: NaiveDate) -> Self {
        let defaults = Config::default();
        Self {
            mode: Mode::Calendar,
            board: AvailabilityBoard::new(today),
            today,
            cursor: today,
            editor_focus: 0,
            week_start: Weekday::Sun,
            title_date_format: defaults.ui.title_date_format,
            month_title_format: defaults.ui.month_title_format,
            theme: Theme::default(),
            show_help: false,
            help_scroll: 0,
            command_buffer: String::new(),
            status_message: None,
        }
    }

    pub fn from_config(config: &Config, today: NaiveDate) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self::starting_on(today).with_scope(config.availability.slot_scope);
        state.week_start = config.ui.week_start()?;
        state.title_date_format = config.ui.title_date_format.clone();
        state.month_title_format = config.ui.month_title_format.clone();
        state.theme = Theme::get_by_name(&config.ui.theme);
        Ok(state)
    }

    pub fn with_scope(mut self, scope: SlotScope) -> Self {
        self.board = AvailabilityBoard::with_scope(self.board.current_month(), scope);
        self
    }

    pub fn month_title(&self) -> String {
        format_date(self.board.current_month(), &self.month_title_format)
    }

    pub fn editor_title(&self) -> Option<String> {
        self.board
            .selected_date()
            .map(|date| format!("Availability for {}", format_date(date, &self.title_date_format)))
    }

    pub fn move_cursor_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };

        if let Some(date) = moved {
            self.cursor = date;
            if !self.board.is_in_displayed_month(date) {
                self.board.go_to_month(date);
            }
        }
    }

    pub fn previous_month(&mut self) {
        self.board.go_to_previous_month();
        self.follow_displayed_month(-1);
    }

    pub fn next_month(&mut self) {
        self.board.go_to_next_month();
        self.follow_displayed_month(1);
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.board.go_to_month(date);
        self.cursor = date;
    }

    pub fn jump_to_today(&mut self) {
        self.go_to(self.today);
    }

    pub fn open_editor(&mut self) {
        self.board.select_date(self.cursor);
        self.editor_focus = 0;
        self.mode = Mode::Editor;
    }

    pub fn close_editor(&mut self) {
        self.board.clear_selection();
        self.editor_focus = 0;
        self.mode = Mode::Calendar;
    }

    /// Rows in display order: each half-day switch followed by the slots it
    /// currently offers, then the cancel action.
    pub fn editor_rows(&self) -> Vec<EditorRow> {
        if self.board.selected_date().is_none() {
            return Vec::new();
        }

        let mut rows = Vec::new();
        for period in Period::ALL {
            rows.push(EditorRow::HalfDay(period));
            let visible = self.board.visible_slots_for(period).len();
            rows.extend((0..visible).map(|index| EditorRow::Slot(period, index)));
        }
        rows.push(EditorRow::Cancel);
        rows
    }

    pub fn focused_row(&self) -> Option<EditorRow> {
        self.editor_rows().get(self.editor_focus).copied()
    }

    pub fn focus_next_row(&mut self) {
        let rows = self.editor_rows().len();
        if rows > 0 && self.editor_focus < rows - 1 {
            self.editor_focus += 1;
        }
    }

    pub fn focus_previous_row(&mut self) {
        self.editor_focus = self.editor_focus.saturating_sub(1);
    }

    pub fn activate_focused_row(&mut self) {
        match self.focused_row() {
            Some(EditorRow::HalfDay(period)) => {
                self.board.toggle_half_day(period);
                self.clamp_editor_focus();
            }
            Some(EditorRow::Slot(period, index)) => self.board.toggle_slot(period, index),
            Some(EditorRow::Cancel) => self.close_editor(),
            None => {}
        }
    }

    pub fn enter_command_mode(&mut self) {
        self.mode = Mode::Command;
        self.command_buffer = ":".to_string();
        self.status_message = None;
    }

    pub fn open_help(&mut self) {
        self.show_help = true;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
        self.help_scroll = 0;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    fn clamp_editor_focus(&mut self) {
        let rows = self.editor_rows().len();
        self.editor_focus = self.editor_focus.min(rows.saturating_sub(1));
    }

    fn follow_displayed_month(&mut self, months: i32) {
        let shifted = add_months(self.cursor, months).filter(|d| self.board.is_in_displayed_month(*d));
        self.cursor = shifted.unwrap_or_else(|| start_of_month(self.board.current_month()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
