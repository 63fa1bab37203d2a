use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use availability_board::{app::AppState, ui::month_view};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);

    let header_style = Style::default().fg(app.theme.weekday_header);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" < ", header_style),
            Span::styled(
                layout.title.clone(),
                Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" > ", header_style),
        ]),
        Line::from(""),
        Line::from(
            layout
                .weekday_labels
                .iter()
                .map(|label| Span::styled(format!(" {} ", label), header_style))
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for day_cell in &week.days {
            let Some(date) = day_cell.date else {
                day_spans.push(Span::raw("     "));
                continue;
            };

            let marker = if day_cell.has_overrides { '*' } else { ' ' };
            let day_text = format!(" {}{} ", date.format("%d"), marker);

            let mut style = Style::default();

            if day_cell.is_selected {
                style = style
                    .bg(app.theme.selected_bg)
                    .fg(app.theme.selected_fg)
                    .add_modifier(Modifier::BOLD);
            } else if day_cell.is_cursor {
                style = style.bg(app.theme.cursor).add_modifier(Modifier::BOLD);
            } else if day_cell.is_today {
                style = style.fg(app.theme.today).add_modifier(Modifier::BOLD);
            }

            if day_cell.has_overrides {
                style = style.add_modifier(Modifier::UNDERLINED);
            }

            day_spans.push(Span::styled(day_text, style));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("hjkl", Style::default().fg(app.theme.focus)),
        Span::raw(" = Move | "),
        Span::styled("{ }", Style::default().fg(app.theme.focus)),
        Span::raw(" = Month | "),
        Span::styled("Enter", Style::default().fg(app.theme.switch_on)),
        Span::raw(" = Edit availability | "),
        Span::styled("t", Style::default().fg(app.theme.focus)),
        Span::raw(" = Today"),
    ]));

    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
