use datepicker_core::config::loader::default_config_path;
use datepicker_core::config::{ConfigFileError, ResolvedConfig, WidgetOptions};
use datepicker_core::calendar::DayLabelStart;
use std::path::Path;

pub fn run(cfg: &ResolvedConfig) {
    let options =
        WidgetOptions::from_attributes(|name| cfg.attribute(name).map(str::to_string));

    match options {
        Ok(opts) => {
            let weekdays = match (opts.disabled_weekdays.saturday, opts.disabled_weekdays.sunday) {
                (true, true) => "saturday, sunday",
                (true, false) => "saturday",
                (false, true) => "sunday",
                (false, false) => "none",
            };
            let label_start = match opts.day_label_start {
                DayLabelStart::FirstOfMonth => "first",
                DayLabelStart::DayBeforeFirst => "previous",
            };

            println!("OK   datepick doctor");
            println!(
                "path: {}",
                cfg.source
                    .as_ref()
                    .map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
            );
            println!("locale: {}", opts.locale.tag());
            println!("textfield_format: {}", opts.format.pattern());
            println!("start_date: {}", opts.range.start());
            println!("end_date: {}", opts.range.end());
            println!("disabled_weekdays: {weekdays}");
            println!("day_label_start: {label_start}");
        }
        Err(e) => {
            println!("FAIL datepick doctor");
            println!("{e}");
            std::process::exit(1);
        }
    }
}

/// Report a config file that could not be loaded.
pub fn fail(err: &ConfigFileError, config_path: Option<&Path>) -> ! {
    println!("FAIL datepick doctor");
    println!("{err}");
    if config_path.is_none() {
        println!("looked for: {}", default_config_path().display());
    }
    std::process::exit(1);
}
