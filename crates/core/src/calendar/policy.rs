//! Which dates may be selected.

use chrono::Weekday;
use thiserror::Error;

use super::date::DateValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    Inverted { start: DateValue, end: DateValue },
}

/// Inclusive bounds on selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateValue,
    end: DateValue,
}

impl DateRange {
    /// # Errors
    ///
    /// [`RangeError::Inverted`] when `start` is after `end`.
    pub fn new(start: DateValue, end: DateValue) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> DateValue {
        self.start
    }

    #[must_use]
    pub fn end(self) -> DateValue {
        self.end
    }

    #[must_use]
    pub fn contains(self, date: DateValue) -> bool {
        date >= self.start && date <= self.end
    }
}

impl Default for DateRange {
    /// 1900-01-01 through 2100-12-31.
    fn default() -> Self {
        Self {
            start: DateValue::from_ymd0(1900, 0, 1).expect("1900-01-01 is a valid date"),
            end: DateValue::from_ymd0(2100, 11, 31).expect("2100-12-31 is a valid date"),
        }
    }
}

/// Weekdays excluded from selection. Only weekend days can be excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisabledWeekdays {
    pub saturday: bool,
    pub sunday: bool,
}

impl DisabledWeekdays {
    /// Combine the three host flags; `weekends` implies both days.
    #[must_use]
    pub fn from_flags(weekends: bool, saturdays: bool, sundays: bool) -> Self {
        Self { saturday: weekends || saturdays, sunday: weekends || sundays }
    }

    #[must_use]
    pub fn contains(self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
            _ => false,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.saturday && !self.sunday
    }
}

/// A date is selectable when it lies inside `range` and its weekday is not
/// disabled.
#[must_use]
pub fn is_selectable(date: DateValue, range: DateRange, disabled: DisabledWeekdays) -> bool {
    range.contains(date) && !disabled.contains(date.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m0: u32, day: u32) -> DateValue {
        DateValue::from_ymd0(y, m0, day).unwrap()
    }

    #[test]
    fn test_from_flags_combines_weekend_days() {
        assert!(DisabledWeekdays::from_flags(false, false, false).is_empty());

        let weekends = DisabledWeekdays::from_flags(true, false, false);
        assert!(weekends.contains(Weekday::Sat));
        assert!(weekends.contains(Weekday::Sun));
        assert_eq!(weekends, DisabledWeekdays::from_flags(false, true, true));

        let saturdays = DisabledWeekdays::from_flags(false, true, false);
        assert!(saturdays.contains(Weekday::Sat));
        assert!(!saturdays.contains(Weekday::Sun));
    }

    #[test]
    fn test_weekdays_are_never_disabled() {
        let all = DisabledWeekdays::from_flags(true, true, true);
        for weekday in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            assert!(!all.contains(weekday), "{weekday}");
        }
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = DateRange::new(d(2021, 0, 1), d(2021, 0, 31)).unwrap();
        assert!(range.contains(d(2021, 0, 1)));
        assert!(range.contains(d(2021, 0, 31)));
        assert!(!range.contains(d(2020, 11, 31)));
        assert!(!range.contains(d(2021, 1, 1)));

        let single = DateRange::new(d(2021, 0, 5), d(2021, 0, 5)).unwrap();
        assert!(single.contains(d(2021, 0, 5)));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(d(2021, 0, 2), d(2021, 0, 1)).unwrap_err();
        assert_eq!(err, RangeError::Inverted { start: d(2021, 0, 2), end: d(2021, 0, 1) });
    }

    #[test]
    fn test_selectable_needs_range_and_weekday() {
        let range = DateRange::new(d(2021, 2, 1), d(2021, 2, 31)).unwrap();
        let sundays = DisabledWeekdays::from_flags(false, false, true);

        // 2021-03-13 is a Saturday, 2021-03-14 a Sunday.
        assert!(is_selectable(d(2021, 2, 13), range, sundays));
        assert!(!is_selectable(d(2021, 2, 14), range, sundays));
        assert!(!is_selectable(d(2021, 3, 1), range, sundays));
    }
}
