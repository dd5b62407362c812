//! View-models for the dialog: month and year options, weekday labels and
//! the day grid. Rendering backends consume these; nothing here touches a
//! visual tree.

use serde::Serialize;

use super::date::DateValue;
use super::policy::{DateRange, DisabledWeekdays, is_selectable};
use crate::format::Locale;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    /// Zero-based month.
    pub index: u32,
    pub label: String,
    pub disabled: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOption {
    pub year: i32,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub selected: bool,
    pub disabled: bool,
}

/// Where the row of seven weekday labels starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DayLabelStart {
    /// Label `i` names the weekday of day `i + 1`.
    #[default]
    FirstOfMonth,
    /// Legacy layout: the row starts one day before the 1st of the month.
    DayBeforeFirst,
}

/// Everything a rendering backend needs to draw the open dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogView {
    pub month_label: String,
    pub year_label: String,
    pub prev_month_label: String,
    pub next_month_label: String,
    pub month_options: Vec<MonthOption>,
    pub year_options: Vec<YearOption>,
    pub day_labels: Vec<String>,
    pub days: Vec<DayCell>,
}

/// The inputs one render depends on.
#[derive(Debug, Clone, Copy)]
pub struct GridContext {
    pub view_date: DateValue,
    pub selected: Option<DateValue>,
    pub range: DateRange,
    pub disabled: DisabledWeekdays,
    pub locale: Locale,
    pub label_start: DayLabelStart,
}

impl DialogView {
    #[must_use]
    pub fn build(ctx: &GridContext) -> Self {
        let year = ctx.view_date.year();
        let month0 = ctx.view_date.month0();
        Self {
            month_label: ctx.locale.month_name(month0).to_string(),
            year_label: year.to_string(),
            prev_month_label: ctx.locale.prev_month_label().to_string(),
            next_month_label: ctx.locale.next_month_label().to_string(),
            month_options: build_month_options(year, month0, ctx.range, ctx.locale),
            year_options: build_year_options(ctx.range, year),
            day_labels: build_day_labels(year, month0, ctx.locale, ctx.label_start),
            days: build_day_grid(year, month0, ctx.selected, ctx.range, ctx.disabled),
        }
    }
}

/// Twelve month entries for `view_year`.
///
/// A month is disabled only when none of its days fall inside `range`.
#[must_use]
pub fn build_month_options(
    view_year: i32,
    view_month0: u32,
    range: DateRange,
    locale: Locale,
) -> Vec<MonthOption> {
    (0..12)
        .map(|index| {
            let disabled = match DateValue::from_ymd0(view_year, index, 1) {
                Some(first) => first > range.end() || first.end_of_month() < range.start(),
                None => true,
            };
            MonthOption {
                index,
                label: locale.month_name(index).to_string(),
                disabled,
                selected: index == view_month0,
            }
        })
        .collect()
}

#[must_use]
pub fn build_year_options(range: DateRange, view_year: i32) -> Vec<YearOption> {
    (range.start().year()..=range.end().year())
        .map(|year| YearOption { year, selected: year == view_year })
        .collect()
}

/// One cell per day of the month, without leading or trailing padding.
#[must_use]
pub fn build_day_grid(
    view_year: i32,
    view_month0: u32,
    selected: Option<DateValue>,
    range: DateRange,
    disabled: DisabledWeekdays,
) -> Vec<DayCell> {
    let Some(first) = DateValue::from_ymd0(view_year, view_month0, 1) else {
        return Vec::new();
    };

    (1..=first.days_in_month())
        .filter_map(|day| first.with_day(day))
        .map(|date| DayCell {
            day: date.day(),
            selected: selected == Some(date),
            disabled: !is_selectable(date, range, disabled),
        })
        .collect()
}

/// Seven consecutive two-letter weekday labels.
#[must_use]
pub fn build_day_labels(
    view_year: i32,
    view_month0: u32,
    locale: Locale,
    start: DayLabelStart,
) -> Vec<String> {
    let Some(first) = DateValue::from_ymd0(view_year, view_month0, 1) else {
        return Vec::new();
    };
    let offset = match start {
        DayLabelStart::FirstOfMonth => 0,
        DayLabelStart::DayBeforeFirst => -1,
    };

    (0..7)
        .filter_map(|i| first.shift_days(offset + i))
        .map(|date| locale.weekday_min(date.weekday()).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m0: u32, day: u32) -> DateValue {
        DateValue::from_ymd0(y, m0, day).unwrap()
    }

    #[test]
    fn test_month_option_disabled_only_when_fully_outside() {
        // Range starts mid-March and ends mid-October.
        let range = DateRange::new(d(2021, 2, 15), d(2021, 9, 15)).unwrap();
        let options = build_month_options(2021, 5, range, Locale::En);

        let disabled: Vec<u32> =
            options.iter().filter(|o| o.disabled).map(|o| o.index).collect();
        assert_eq!(disabled, vec![0, 1, 10, 11]);
        assert!(options[5].selected);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
        assert_eq!(options[2].label, "March");
    }

    #[test]
    fn test_year_options_cover_range() {
        let range = DateRange::new(d(2019, 5, 1), d(2022, 0, 1)).unwrap();
        let years = build_year_options(range, 2020);
        assert_eq!(years.iter().map(|y| y.year).collect::<Vec<_>>(), [2019, 2020, 2021, 2022]);
        assert!(years[1].selected);

        let outside = build_year_options(range, 2030);
        assert!(outside.iter().all(|y| !y.selected));
    }

    #[test]
    fn test_day_grid_is_flat() {
        let grid = build_day_grid(2024, 1, None, DateRange::default(), DisabledWeekdays::default());
        assert_eq!(grid.len(), 29);
        assert_eq!(grid[0].day, 1);
        assert_eq!(grid[28].day, 29);
    }

    #[test]
    fn test_day_grid_marks_selected_and_disabled() {
        let range = DateRange::new(d(2020, 5, 3), d(2020, 5, 30)).unwrap();
        let weekends = DisabledWeekdays::from_flags(true, false, false);
        let grid = build_day_grid(2020, 5, Some(d(2020, 5, 10)), range, weekends);

        assert!(grid[0].disabled); // before range
        assert!(grid[5].disabled); // Saturday 6 June
        assert!(grid[6].disabled); // Sunday 7 June
        assert!(!grid[7].disabled);
        assert!(grid[9].selected);
        assert_eq!(grid.iter().filter(|c| c.selected).count(), 1);
    }

    #[test]
    fn test_day_labels_first_of_month() {
        // 1 March 2021 is a Monday.
        let labels = build_day_labels(2021, 2, Locale::Nl, DayLabelStart::FirstOfMonth);
        assert_eq!(labels, ["ma", "di", "wo", "do", "vr", "za", "zo"]);
    }

    #[test]
    fn test_day_labels_day_before_first() {
        let labels = build_day_labels(2021, 2, Locale::Nl, DayLabelStart::DayBeforeFirst);
        assert_eq!(labels, ["zo", "ma", "di", "wo", "do", "vr", "za"]);
    }
}
