//! Main layout and frame composition.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use datepicker_core::widget::TextField;

use super::{dialog, status};
use crate::tui::app::{App, Mode};

/// Draw the entire application UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Text field + trigger
            Constraint::Min(5),    // Dialog
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_chunks[0], app);
    draw_field(frame, main_chunks[1], app);
    dialog::draw(frame, main_chunks[2], app);
    status::draw(frame, main_chunks[3], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let locale_text = format!(
        "[{}]",
        app.picker.options().map_or("uninitialized", |opts| opts.locale.tag())
    );
    let title = "datepick";

    let padding =
        area.width.saturating_sub(title.len() as u16 + locale_text.len() as u16 + 2)
            as usize;

    let line = Line::from(vec![
        Span::styled(format!(" {}", title), Style::default().fg(Color::Cyan).bold()),
        Span::raw(" ".repeat(padding)),
        Span::styled(locale_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_field(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == Mode::EditText;
    let text = if editing { app.input_buffer.clone() } else { app.field.value() };

    let trigger = Span::styled(
        format!(" [{}] ", app.picker.surface().trigger_label),
        Style::default().fg(Color::Cyan),
    );
    let value_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let line = Line::from(vec![Span::styled(format!(" {text}"), value_style), trigger]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(if editing { "Text field (editing)" } else { "Text field" })
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}
