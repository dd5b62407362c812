//! Calendar primitives: the date value, the selectable-date policy, and the
//! view-model builders for the month/year selectors and the day grid.

pub mod date;
pub mod grid;
pub mod policy;

pub use date::DateValue;
pub use grid::{
    DayCell, DayLabelStart, DialogView, GridContext, MonthOption, YearOption, build_day_grid,
    build_day_labels, build_month_options, build_year_options,
};
pub use policy::{DateRange, DisabledWeekdays, RangeError, is_selectable};
