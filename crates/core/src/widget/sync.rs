//! Keeps the bound text field and the selected date in step.

use tracing::debug;

use super::host::TextField;
use crate::calendar::DateValue;
use crate::format::{DateFormat, Locale};

/// Parses and formats field text with one pattern in both directions.
#[derive(Debug, Clone, Copy)]
pub struct TextFieldSynchronizer<'a> {
    format: &'a DateFormat,
    locale: Locale,
}

impl<'a> TextFieldSynchronizer<'a> {
    #[must_use]
    pub fn new(format: &'a DateFormat, locale: Locale) -> Self {
        Self { format, locale }
    }

    /// Lenient parse, without the round-trip check.
    #[must_use]
    pub fn parse_for_display(&self, text: &str) -> Option<DateValue> {
        self.format.parse(text.trim(), self.locale)
    }

    /// The date `text` denotes if it formats back to the same text
    /// (ignoring case and surrounding whitespace), otherwise `None`.
    #[must_use]
    pub fn round_trip(&self, text: &str) -> Option<DateValue> {
        let trimmed = text.trim();
        let date = self.format.parse(trimmed, self.locale)?;
        let formatted = self.format.format(date, self.locale);
        (formatted.to_lowercase() == trimmed.to_lowercase()).then_some(date)
    }

    #[must_use]
    pub fn format(&self, date: DateValue) -> String {
        self.format.format(date, self.locale)
    }

    /// Write `selected` into `field` when it differs from the current
    /// value, followed by one change notification. Returns whether a write
    /// happened.
    pub fn format_for_field<F: TextField>(
        &self,
        selected: Option<DateValue>,
        field: &mut F,
    ) -> bool {
        let Some(date) = selected else {
            return false;
        };
        let output = self.format(date);
        if field.value() == output {
            return false;
        }
        debug!(value = %output, "writing text field");
        field.set_value(&output);
        field.emit_change();
        true
    }
}

/// See [`TextFieldSynchronizer::round_trip`].
#[must_use]
pub fn round_trip(text: &str, format: &DateFormat, locale: Locale) -> Option<DateValue> {
    TextFieldSynchronizer::new(format, locale).round_trip(text)
}
