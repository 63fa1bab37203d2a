use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use availability_board::app::{AppState, Mode};

use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    let title_text = match app.mode {
        Mode::Calendar => "availability-board - Calendar",
        Mode::Editor => "availability-board - Editing",
        Mode::Command => "availability-board - Command",
    };

    let title = Paragraph::new(title_text)
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    calendar_views::month::render(f, app, chunks[1]);

    let (status_text, status_color) = if matches!(app.mode, Mode::Command) {
        (app.command_buffer.to_string(), app.theme.command_mode)
    } else if let Some(message) = &app.status_message {
        (message.clone(), app.theme.error)
    } else {
        (
            "Press 'q' to quit, '?' for help".to_string(),
            app.theme.status_bar,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    if app.board.selected_date().is_some() {
        dialogs::availability::render(f, app);
    }

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
