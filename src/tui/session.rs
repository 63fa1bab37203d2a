use std::io;

use chrono::{Local, NaiveDate};
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use availability_board::{
    app::{AppState, Mode},
    input::{command_mode, editor_mode, normal_mode},
    storage::config::Config,
};

use crate::tui::presentation::ui;

pub fn run_tui(config: &Config, month: Option<NaiveDate>) -> Result<(), io::Error> {
    let mut app = AppState::from_config(config, Local::now().date_naive())
        .map_err(|e| io::Error::other(e.to_string()))?;
    if let Some(month) = month {
        app.go_to(month);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {}", err);
        println!("Error: {:?}", err);
    }

    tracing::info!("Session closed, availability discarded");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if app.show_help {
                handle_help_keys(key.code, app);
                continue;
            }

            match app.mode {
                Mode::Calendar => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    _ => normal_mode::handle_key(key.code, app),
                },
                Mode::Editor => editor_mode::handle_key(key.code, app),
                Mode::Command => {
                    if command_mode::handle_key(key.code, app) {
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => app.close_help(),
        _ => {}
    }
}
