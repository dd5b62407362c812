//! Status bar rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let left_text = match (&app.mode, app.dialog_open()) {
        (Mode::Browse, true) => {
            " [arrows] move  [Enter] select  [</>] month  [[/]] year  [Esc] close  [q] quit"
        }
        (Mode::Browse, false) => " [Enter] open  [e] edit  [q] quit",
        (Mode::EditText, _) => " [Enter] submit  [Esc] cancel",
    };

    let (right_text, right_style) = match &app.status {
        Some(status) if status.is_error => (status.text.as_str(), Style::default().fg(Color::Red)),
        Some(status) => (status.text.as_str(), Style::default().fg(Color::Green)),
        None => ("Ready", Style::default().fg(Color::DarkGray)),
    };

    let padding = area
        .width
        .saturating_sub(left_text.len() as u16 + right_text.len() as u16 + 2)
        as usize;

    let line = Line::from(vec![
        Span::styled(left_text, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, right_style),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
