//! Print one month of the dialog.

use datepicker_core::calendar::{DayCell, DialogView};
use datepicker_core::config::ResolvedConfig;
use datepicker_core::{DateValue, Message};
use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::error;

use super::open_headless;
use crate::MonthArgs;

#[derive(Serialize)]
struct MonthReport<'a> {
    selected: Option<DateValue>,
    view: &'a DialogView,
}

pub fn run(cfg: &ResolvedConfig, args: &MonthArgs) {
    let (mut picker, _field) = open_headless(cfg, &args.value, DateValue::today());

    let mut navigation = Vec::new();
    if let Some(year) = args.year {
        navigation.push(Message::YearSelected(year));
    }
    if let Some(month) = args.month {
        navigation.push(Message::MonthSelected(month - 1));
    }
    for msg in navigation {
        if let Err(e) = picker.update(msg) {
            error!("{e}");
            std::process::exit(1);
        }
    }

    let Some(view) = picker.view() else {
        error!("date picker did not initialize");
        std::process::exit(1);
    };

    if args.json {
        let report = MonthReport { selected: picker.selected_date(), view: &view };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize view: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", render_text(&view));
    if let Some(date) = picker.selected_date() {
        println!("selected: {date}");
    }
}

fn cell_text(cell: &DayCell) -> String {
    if cell.selected {
        format!("[{}]", cell.day)
    } else if cell.disabled {
        format!("({})", cell.day)
    } else {
        cell.day.to_string()
    }
}

/// Header, weekday labels and the flat day grid wrapped at seven cells.
pub fn render_text(view: &DialogView) -> String {
    let mut builder = Builder::default();
    builder.push_record(view.day_labels.iter().cloned());
    for row in view.days.chunks(7) {
        let mut cells: Vec<String> = row.iter().map(cell_text).collect();
        cells.resize(7, String::new());
        builder.push_record(cells);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!(
        "{} {}\n{table}\n[d] selected  (d) disabled\n",
        view.month_label, view.year_label
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use datepicker_core::calendar::{DateRange, DisabledWeekdays, DayLabelStart, GridContext};
    use datepicker_core::Locale;

    #[test]
    fn test_render_text_marks_cells() {
        let range = DateRange::default();
        let disabled = DisabledWeekdays::from_flags(false, false, true);
        let view = DialogView::build(&GridContext {
            view_date: DateValue::from_ymd0(2021, 2, 1).unwrap(),
            selected: DateValue::from_ymd0(2021, 2, 15),
            range,
            disabled,
            locale: Locale::En,
            label_start: DayLabelStart::FirstOfMonth,
        });

        let text = render_text(&view);
        assert!(text.starts_with("March 2021\n"));
        assert!(text.contains("[15]"));
        assert!(text.contains("(7)"));
        assert!(text.contains("Mo"));
        assert!(!text.contains("(8)"));
    }
}
