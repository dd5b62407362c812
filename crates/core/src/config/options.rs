//! Widget options read from host attributes at Full initialization.

use thiserror::Error;

use crate::calendar::{DateRange, DateValue, DayLabelStart, DisabledWeekdays, RangeError};
use crate::format::{DateFormat, FormatError, Locale};

/// Fixed pattern for `data-start-date` / `data-end-date`, independent of
/// the text field format.
pub const RANGE_DATE_PATTERN: &str = "DD-MM-YYYY";

pub const ATTR_LOCALE: &str = "data-locale";
pub const ATTR_TEXTFIELD_FORMAT: &str = "data-textfield-format";
pub const ATTR_START_DATE: &str = "data-start-date";
pub const ATTR_END_DATE: &str = "data-end-date";
pub const ATTR_DISABLE_WEEKENDS: &str = "data-disable-weekends";
pub const ATTR_DISABLE_SATURDAYS: &str = "data-disable-saturdays";
pub const ATTR_DISABLE_SUNDAYS: &str = "data-disable-sundays";
pub const ATTR_DAY_LABEL_START: &str = "data-day-label-start";

/// Rejected host configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("invalid text field format: {0}")]
    InvalidFormat(#[from] FormatError),

    #[error("{attribute}: '{value}' is not a DD-MM-YYYY date")]
    InvalidDate { attribute: &'static str, value: String },

    #[error("invalid date range: {0}")]
    InvertedRange(#[from] RangeError),

    #[error("{attribute}: '{value}' is not a boolean")]
    InvalidFlag { attribute: &'static str, value: String },

    #[error("{attribute}: {date} is outside {first}..={last}, the years a two-digit year can name")]
    OutsideYearWindow { attribute: &'static str, date: DateValue, first: i32, last: i32 },

    #[error("data-day-label-start: '{0}' is neither 'first' nor 'previous'")]
    InvalidDayLabelStart(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    pub locale: Locale,
    pub format: DateFormat,
    pub range: DateRange,
    pub disabled_weekdays: DisabledWeekdays,
    pub day_label_start: DayLabelStart,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            format: DateFormat::new("DD-MM-YYYY").expect("default pattern is complete"),
            range: DateRange::default(),
            disabled_weekdays: DisabledWeekdays::default(),
            day_label_start: DayLabelStart::default(),
        }
    }
}

impl WidgetOptions {
    /// Read options through `attr`, falling back to defaults for absent
    /// attributes. Blank values count as absent, except for the boolean
    /// flags where a bare attribute means set.
    ///
    /// A `YY` text field format narrows the default range to the years it
    /// can write and read back.
    ///
    /// # Errors
    ///
    /// Any present but unusable value is a [`ConfigError`].
    pub fn from_attributes<F>(attr: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let value = |name: &str| attr(name).filter(|v| !v.trim().is_empty());

        let locale = match value(ATTR_LOCALE) {
            Some(tag) => Locale::from_tag(&tag).ok_or(ConfigError::UnknownLocale(tag))?,
            None => defaults.locale,
        };

        let format = match value(ATTR_TEXTFIELD_FORMAT) {
            Some(pattern) => DateFormat::new(&pattern)?,
            None => defaults.format,
        };

        let window = format.year_window().and_then(|(first, last)| {
            Some((DateValue::from_ymd0(first, 0, 1)?, DateValue::from_ymd0(last, 11, 31)?))
        });
        let (default_start, default_end) =
            window.unwrap_or((defaults.range.start(), defaults.range.end()));

        let start = match value(ATTR_START_DATE) {
            Some(text) => parse_range_date(ATTR_START_DATE, text)?,
            None => default_start,
        };
        let end = match value(ATTR_END_DATE) {
            Some(text) => parse_range_date(ATTR_END_DATE, text)?,
            None => default_end,
        };
        if let Some((first, last)) = window {
            for (attribute, date) in [(ATTR_START_DATE, start), (ATTR_END_DATE, end)] {
                if date < first || date > last {
                    return Err(ConfigError::OutsideYearWindow {
                        attribute,
                        date,
                        first: first.year(),
                        last: last.year(),
                    });
                }
            }
        }
        let range = DateRange::new(start, end)?;

        let disabled_weekdays = DisabledWeekdays::from_flags(
            flag(&attr, ATTR_DISABLE_WEEKENDS)?,
            flag(&attr, ATTR_DISABLE_SATURDAYS)?,
            flag(&attr, ATTR_DISABLE_SUNDAYS)?,
        );

        let day_label_start = match value(ATTR_DAY_LABEL_START) {
            Some(text) => match text.trim().to_lowercase().as_str() {
                "first" => DayLabelStart::FirstOfMonth,
                "previous" => DayLabelStart::DayBeforeFirst,
                _ => return Err(ConfigError::InvalidDayLabelStart(text)),
            },
            None => defaults.day_label_start,
        };

        Ok(Self { locale, format, range, disabled_weekdays, day_label_start })
    }
}

/// Range bounds must round-trip through the fixed pattern exactly.
fn parse_range_date(attribute: &'static str, value: String) -> Result<DateValue, ConfigError> {
    let format = DateFormat::new(RANGE_DATE_PATTERN).expect("range pattern is complete");
    let trimmed = value.trim();
    format
        .parse(trimmed, Locale::default())
        .filter(|date| format.format(*date, Locale::default()) == trimmed)
        .ok_or(ConfigError::InvalidDate { attribute, value })
}

/// A bare attribute (empty value) counts as set.
fn flag<F>(attr: &F, attribute: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = attr(attribute) else {
        return Ok(false);
    };
    match value.trim().to_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { attribute, value }),
    }
}
