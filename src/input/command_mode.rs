use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Today,
    Goto(NaiveDate),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "today" => Command::Today,
        "help" => Command::Help,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Some(date) = parse_goto_target(parts[1]) {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Accepts a full date or a bare `YYYY-MM`, which means the first of the month.
fn parse_goto_target(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d"))
        .ok()
}

/// Feeds one key into the command line. Returns `true` when the session
/// should end.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            leave_command_mode(state);
            execute(command, state)
        }
        KeyCode::Esc => {
            leave_command_mode(state);
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                leave_command_mode(state);
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn execute(command: Command, state: &mut AppState) -> bool {
    match command {
        Command::Quit => return true,
        Command::Today => state.jump_to_today(),
        Command::Goto(date) => state.go_to(date),
        Command::Help => state.open_help(),
        Command::Theme(name) => {
            if Theme::is_known(&name) {
                state.theme = Theme::get_by_name(&name);
            } else {
                state.set_status(format!(
                    "Unknown theme '{}'. Available: {}",
                    name,
                    Theme::available_themes().join(", ")
                ));
            }
        }
        Command::Error(message) => {
            tracing::warn!("Rejected command: {}", message);
            state.set_status(message);
        }
    }
    false
}

fn leave_command_mode(state: &mut AppState) {
    state.command_buffer.clear();
    state.mode = if state.board.selected_date().is_some() {
        Mode::Editor
    } else {
        Mode::Calendar
    };
}
