use std::{
    env,
    io::{self, Write},
};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use availability_board::{
    app::AppState,
    calendar::{Period, slots_for},
    storage::config::Config,
    ui::month_view,
};

pub const USAGE: &str = "Usage: availability-board [--month YYYY/MM] [--print]";

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("Invalid month '{0}'. Use YYYY/MM.")]
    InvalidMonth(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Interactive { month: Option<NaiveDate> },
    Print { month: Option<NaiveDate> },
    Help,
}

pub fn parse_cli_mode() -> Result<CliMode, CliError> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliMode, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut print = false;
    let mut month = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => print = true,
            "--month" => {
                let value = args.next().ok_or(CliError::MissingValue("--month"))?;
                month = Some(parse_month(&value)?);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    if print {
        Ok(CliMode::Print { month })
    } else {
        Ok(CliMode::Interactive { month })
    }
}

fn parse_month(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(&format!("{}/01", value), "%Y/%m/%d")
        .map_err(|_| CliError::InvalidMonth(value.to_string()))
}

pub fn run_print_mode(config: &Config, month: Option<NaiveDate>) -> Result<(), io::Error> {
    let mut app = AppState::from_config(config, Local::now().date_naive())
        .map_err(|e| io::Error::other(e.to_string()))?;
    if let Some(month) = month {
        app.go_to(month);
    }

    let text = format_month_text(&app);
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}

/// Plain-text rendering of the displayed month followed by the slot table.
pub fn format_month_text(app: &AppState) -> String {
    let layout = month_view::calculate_layout(app);
    let mut lines = vec![layout.title.clone(), String::new()];

    lines.push(
        layout
            .weekday_labels
            .iter()
            .map(|label| format!("{:>4}", label))
            .collect::<String>(),
    );

    for week in &layout.weeks {
        let row: String = week
            .days
            .iter()
            .map(|cell| match cell.date {
                Some(date) => format!("{:>4}", date.format("%d").to_string()),
                None => "    ".to_string(),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    lines.push(String::new());
    for period in Period::ALL {
        let slots: Vec<String> = slots_for(period).iter().map(|slot| slot.label()).collect();
        lines.push(format!("{:<10} {}", format!("{}:", period.label()), slots.join(", ")));
    }

    lines.join("\n")
}
