use crossterm::event::KeyCode;

use crate::app::AppState;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => state.focus_next_row(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => state.focus_previous_row(),
        KeyCode::Char(' ') | KeyCode::Enter => state.activate_focused_row(),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => state.close_editor(),
        KeyCode::Char(':') => state.enter_command_mode(),
        KeyCode::Char('?') => state.open_help(),
        _ => {}
    }
}
