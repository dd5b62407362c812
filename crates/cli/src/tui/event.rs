//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Message, Mode};

/// Map a key event to an optional message based on current app mode.
pub fn map_key_event(app: &App, key: KeyEvent) -> Option<Message> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match &app.mode {
        Mode::Browse => map_browse_keys(app, key),
        Mode::EditText => map_input_keys(key),
    }
}

fn map_browse_keys(app: &App, key: KeyEvent) -> Option<Message> {
    let open = app.dialog_open();
    match key.code {
        KeyCode::Char('t') | KeyCode::Char(' ') => Some(Message::PressTrigger),
        KeyCode::Enter if open => Some(Message::SelectCursor),
        KeyCode::Enter => Some(Message::PressTrigger),

        KeyCode::Left | KeyCode::Char('h') if open => Some(Message::MoveCursor(-1)),
        KeyCode::Right | KeyCode::Char('l') if open => Some(Message::MoveCursor(1)),
        KeyCode::Up | KeyCode::Char('k') if open => Some(Message::MoveCursor(-7)),
        KeyCode::Down | KeyCode::Char('j') if open => Some(Message::MoveCursor(7)),

        KeyCode::Char('<') | KeyCode::Char(',') => Some(Message::PrevMonth),
        KeyCode::Char('>') | KeyCode::Char('.') => Some(Message::NextMonth),
        KeyCode::Char('[') => Some(Message::ShiftYear(-1)),
        KeyCode::Char(']') => Some(Message::ShiftYear(1)),

        KeyCode::Char('e') => Some(Message::EditText),
        KeyCode::Esc => Some(Message::ClickElsewhere),
        KeyCode::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn map_input_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char(c) => Some(Message::InputChar(c)),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Enter => Some(Message::InputSubmit),
        KeyCode::Esc => Some(Message::Cancel),
        _ => None,
    }
}
