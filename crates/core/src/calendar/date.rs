//! Immutable calendar date with zero-based months.
//!
//! Wraps [`chrono::NaiveDate`] so the rest of the crate never has to juggle
//! one-based chrono months against the zero-based month indices used by the
//! month selector.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use serde::Serialize;

/// A calendar date: (year, month in `0..=11`, day).
///
/// Compared by calendar value. Serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Build a date from a zero-based month. `None` for impossible dates.
    #[must_use]
    pub fn from_ymd0(year: i32, month0: u32, day: u32) -> Option<Self> {
        if month0 > 11 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, day).map(Self)
    }

    /// The local calendar date.
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (January = 0).
    #[must_use]
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    #[must_use]
    pub fn days_in_month(self) -> u32 {
        days_in_month(self.year(), self.0.month())
    }

    #[must_use]
    pub fn start_of_month(self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    #[must_use]
    pub fn end_of_month(self) -> Self {
        Self(self.0.with_day(self.days_in_month()).unwrap_or(self.0))
    }

    /// Shift by whole months, clamping the day (Jan 31 + 1 = Feb 28/29).
    ///
    /// Returns `self` unchanged when the result leaves chrono's range.
    #[must_use]
    pub fn add_months(self, months: i32) -> Self {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted.map(Self).unwrap_or(self)
    }

    /// Replace the month, clamping the day. `None` if `month0 > 11`.
    #[must_use]
    pub fn with_month0(self, month0: u32) -> Option<Self> {
        if month0 > 11 {
            return None;
        }
        let day = self.day().min(days_in_month(self.year(), month0 + 1));
        NaiveDate::from_ymd_opt(self.year(), month0 + 1, day).map(Self)
    }

    /// Replace the year, clamping Feb 29 to Feb 28 in non-leap years.
    #[must_use]
    pub fn with_year(self, year: i32) -> Option<Self> {
        let day = self.day().min(days_in_month(year, self.0.month()));
        NaiveDate::from_ymd_opt(year, self.0.month(), day).map(Self)
    }

    /// The same month with a different day. `None` if the day does not exist.
    #[must_use]
    pub fn with_day(self, day: u32) -> Option<Self> {
        self.0.with_day(day).map(Self)
    }

    #[must_use]
    pub fn shift_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(chrono::Duration::days(days)).map(Self)
    }

    #[must_use]
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m0: u32, day: u32) -> DateValue {
        DateValue::from_ymd0(y, m0, day).unwrap()
    }

    #[test]
    fn test_month_is_zero_based() {
        let date = d(2021, 2, 15);
        assert_eq!(date.month0(), 2);
        assert_eq!(date.to_string(), "2021-03-15");
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(DateValue::from_ymd0(2021, 1, 29).is_none());
        assert!(DateValue::from_ymd0(2021, 12, 1).is_none());
        assert!(DateValue::from_ymd0(2020, 1, 29).is_some());
    }

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(d(2024, 0, 31).add_months(1), d(2024, 1, 29));
        assert_eq!(d(2023, 0, 31).add_months(1), d(2023, 1, 28));
        assert_eq!(d(2024, 0, 15).add_months(-1), d(2023, 11, 15));
    }

    #[test]
    fn test_with_year_clamps_leap_day() {
        assert_eq!(d(2024, 1, 29).with_year(2023), Some(d(2023, 1, 28)));
    }

    #[test]
    fn test_month_bounds() {
        let date = d(2024, 1, 10);
        assert_eq!(date.start_of_month(), d(2024, 1, 1));
        assert_eq!(date.end_of_month(), d(2024, 1, 29));
        assert_eq!(date.days_in_month(), 29);
    }
}
