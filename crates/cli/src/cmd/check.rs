use datepicker_core::DateValue;
use datepicker_core::config::ResolvedConfig;

use super::open_headless;

/// Print the date `text` would select, or `invalid`.
pub fn run(cfg: &ResolvedConfig, text: &str) {
    let (picker, _field) = open_headless(cfg, text, DateValue::today());

    match picker.selected_date() {
        Some(date) => println!("{date}"),
        None => println!("invalid"),
    }
}
