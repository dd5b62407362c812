//! Interactive terminal host for the date picker.
//!
//! The picker's text field is printed on exit, so `datepick tui` can be
//! used in shell substitutions.

mod app;
mod event;
mod ui;

use std::io;
use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use crossterm::{
    event::{poll, read, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::prelude::*;

use datepicker_core::config::ResolvedConfig;
use datepicker_core::widget::TextField;
use datepicker_core::DateValue;

use app::App;
use event::map_key_event;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

const TICK: Duration = Duration::from_millis(100);

/// Run the picker until the user quits, then print the field value.
pub fn run(config: &ResolvedConfig, value: &str) -> Result<()> {
    let app = App::new(config, value, DateValue::today());

    let mut terminal = setup_terminal()?;
    let outcome =
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| event_loop(&mut terminal, app)));
    restore_terminal(&mut terminal)?;

    let final_value = outcome.map_err(|_| eyre!("date picker panicked"))??;
    if !final_value.is_empty() {
        println!("{final_value}");
    }
    Ok(())
}

fn setup_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(terminal: &mut Term, mut app: App) -> Result<String> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = read()? {
            if let Some(msg) = map_key_event(&app, key) {
                app.update(msg);
            }
        }
    }
    Ok(app.field.value())
}
