use crossterm::event::KeyCode;

use crate::app::AppState;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => state.move_cursor_days(-1),
        KeyCode::Char('l') | KeyCode::Right => state.move_cursor_days(1),
        KeyCode::Char('j') | KeyCode::Down => state.move_cursor_days(7),
        KeyCode::Char('k') | KeyCode::Up => state.move_cursor_days(-7),
        KeyCode::Char('{') | KeyCode::Char('<') | KeyCode::PageUp => state.previous_month(),
        KeyCode::Char('}') | KeyCode::Char('>') | KeyCode::PageDown => state.next_month(),
        KeyCode::Char('t') => state.jump_to_today(),
        KeyCode::Enter | KeyCode::Char(' ') => state.open_editor(),
        KeyCode::Char(':') => state.enter_command_mode(),
        KeyCode::Char('?') => state.open_help(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::app::Mode;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn setup(day: NaiveDate) -> AppState {
        AppState::starting_on(day)
    }

    #[test]
    fn h_moves_cursor_to_previous_day() {
        let mut state = setup(date(2024, 3, 5));
        handle_key(KeyCode::Char('h'), &mut state);
        assert_eq!(state.cursor, date(2024, 3, 4));
    }

    #[test]
    fn j_moves_cursor_down_a_week() {
        let mut state = setup(date(2024, 3, 5));
        handle_key(KeyCode::Char('j'), &mut state);
        assert_eq!(state.cursor, date(2024, 3, 12));
    }

    #[test]
    fn h_on_first_of_month_shows_previous_month() {
        let mut state = setup(date(2024, 3, 1));
        handle_key(KeyCode::Char('h'), &mut state);

        assert_eq!(state.cursor, date(2024, 2, 29));
        assert!(state.board.is_in_displayed_month(date(2024, 2, 1)));
    }

    #[test]
    fn braces_navigate_months() {
        let mut state = setup(date(2024, 3, 5));
        let march = state.board.dates_in_month();

        handle_key(KeyCode::Char('}'), &mut state);
        assert!(state.board.is_in_displayed_month(date(2024, 4, 1)));

        handle_key(KeyCode::Char('{'), &mut state);
        assert_eq!(state.board.dates_in_month(), march);
    }

    #[test]
    fn t_returns_to_today() {
        let mut state = setup(date(2024, 3, 5));
        handle_key(KeyCode::Char('}'), &mut state);
        handle_key(KeyCode::Char('t'), &mut state);

        assert_eq!(state.cursor, date(2024, 3, 5));
        assert!(state.board.is_in_displayed_month(date(2024, 3, 5)));
    }

    #[test]
    fn enter_opens_editor_on_cursor_date() {
        let mut state = setup(date(2024, 3, 5));
        handle_key(KeyCode::Char('l'), &mut state);
        handle_key(KeyCode::Enter, &mut state);

        assert_eq!(state.mode, Mode::Editor);
        assert_eq!(state.board.selected_date(), Some(date(2024, 3, 6)));
    }

    #[test]
    fn colon_enters_command_mode() {
        let mut state = setup(date(2024, 3, 5));
        handle_key(KeyCode::Char(':'), &mut state);

        assert_eq!(state.mode, Mode::Command);
        assert_eq!(state.command_buffer, ":");
    }

    #[test]
    fn question_mark_shows_help() {
        let mut state = setup(date(2024, 3, 5));
        handle_key(KeyCode::Char('?'), &mut state);
        assert!(state.show_help);
    }
}
