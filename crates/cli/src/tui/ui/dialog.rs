//! Calendar dialog rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use datepicker_core::calendar::DayCell;

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let surface = app.picker.surface();
    let (true, Some(view)) = (surface.open, surface.view.as_ref()) else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("< {}", view.prev_month_label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} {}", view.month_label, view.year_label),
                Style::default().bold(),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} >", view.next_month_label),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::raw(""),
        Line::from(
            view.day_labels
                .iter()
                .map(|label| Span::styled(format!("{label:>4}"), Style::default().fg(Color::Cyan)))
                .collect::<Vec<_>>(),
        ),
    ];

    for row in view.days.chunks(7) {
        lines.push(Line::from(
            row.iter().map(|cell| day_span(cell, app.cursor)).collect::<Vec<_>>(),
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(surface.trigger_label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn day_span(cell: &DayCell, cursor: u32) -> Span<'static> {
    let mut style = Style::default();
    if cell.disabled {
        style = style.fg(Color::DarkGray).crossed_out();
    }
    if cell.selected {
        style = style.fg(Color::Green).bold();
    }
    if cell.day == cursor {
        style = style.reversed();
    }
    Span::styled(format!("{:>4}", cell.day), style)
}
