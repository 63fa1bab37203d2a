use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use availability_board::{app::AppState, ui::editor_view};

const ROW_WIDTH: usize = 36;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(layout) = editor_view::calculate_layout(app) else {
        return;
    };

    let mut dialog_text = Vec::new();

    for (i, section) in layout.sections.iter().enumerate() {
        if i > 0 {
            dialog_text.push(Line::from(""));
        }
        dialog_text.push(row(
            app,
            section.heading.to_string(),
            section.enabled,
            section.focused,
            Modifier::BOLD,
        ));
        for slot in &section.slots {
            dialog_text.push(row(
                app,
                format!("  {}", slot.label),
                slot.available,
                slot.focused,
                Modifier::empty(),
            ));
        }
    }

    dialog_text.push(Line::from(""));
    let footer: Vec<Span> = layout
        .footer
        .iter()
        .map(|action| {
            let style = if action.focused {
                Style::default().fg(Color::Black).bg(app.theme.focus)
            } else {
                Style::default().fg(app.theme.focus)
            };
            Span::styled(format!("[ {} ]", action.label), style)
        })
        .collect();
    dialog_text.push(Line::from(footer));

    let area = f.size();
    let dialog_width = (ROW_WIDTH as u16 + 6).min(area.width);
    let dialog_height = (dialog_text.len() as u16 + 2).min(area.height);
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    f.render_widget(Clear, dialog_area);

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", layout.title))
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Left);

    f.render_widget(dialog_paragraph, dialog_area);
}

fn row(app: &AppState, label: String, on: bool, focused: bool, modifier: Modifier) -> Line<'static> {
    let (switch_text, switch_color) = if on {
        ("[on] ", app.theme.switch_on)
    } else {
        ("[off]", app.theme.switch_off)
    };

    let mut label_style = Style::default().add_modifier(modifier);
    if focused {
        label_style = label_style.fg(app.theme.focus).add_modifier(Modifier::REVERSED);
    }

    let padding = ROW_WIDTH.saturating_sub(label.chars().count() + switch_text.len());

    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(switch_text, Style::default().fg(switch_color)),
    ])
}
