//! Month/weekday names and fixed widget labels per locale.

use chrono::Weekday;

/// Supported display locales. Dutch is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Nl,
    En,
}

struct Names {
    months: [&'static str; 12],
    months_short: [&'static str; 12],
    // Indexed from Sunday.
    weekdays: [&'static str; 7],
    weekdays_short: [&'static str; 7],
    weekdays_min: [&'static str; 7],
    trigger: &'static str,
    prev_month: &'static str,
    next_month: &'static str,
}

const NL: Names = Names {
    months: [
        "januari",
        "februari",
        "maart",
        "april",
        "mei",
        "juni",
        "juli",
        "augustus",
        "september",
        "oktober",
        "november",
        "december",
    ],
    months_short: [
        "jan.", "feb.", "mrt.", "apr.", "mei", "jun.", "jul.", "aug.", "sep.", "okt.",
        "nov.", "dec.",
    ],
    weekdays: [
        "zondag",
        "maandag",
        "dinsdag",
        "woensdag",
        "donderdag",
        "vrijdag",
        "zaterdag",
    ],
    weekdays_short: ["zo.", "ma.", "di.", "wo.", "do.", "vr.", "za."],
    weekdays_min: ["zo", "ma", "di", "wo", "do", "vr", "za"],
    trigger: "Kalender",
    prev_month: "Vorige maand",
    next_month: "Volgende maand",
};

const EN: Names = Names {
    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    weekdays_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    weekdays_min: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
    trigger: "Calendar",
    prev_month: "Previous month",
    next_month: "Next month",
};

impl Locale {
    /// Resolve a language tag such as `nl`, `nl-NL` or `en_US`.
    ///
    /// Only the primary subtag is considered.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        match primary.to_lowercase().as_str() {
            "nl" => Some(Locale::Nl),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Nl => "nl",
            Locale::En => "en",
        }
    }

    fn names(self) -> &'static Names {
        match self {
            Locale::Nl => &NL,
            Locale::En => &EN,
        }
    }

    /// Full month name for a zero-based month.
    #[must_use]
    pub fn month_name(self, month0: u32) -> &'static str {
        self.names().months[month_index(month0)]
    }

    #[must_use]
    pub fn month_short(self, month0: u32) -> &'static str {
        self.names().months_short[month_index(month0)]
    }

    #[must_use]
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        self.names().weekdays[weekday_index(weekday)]
    }

    #[must_use]
    pub fn weekday_short(self, weekday: Weekday) -> &'static str {
        self.names().weekdays_short[weekday_index(weekday)]
    }

    /// Two-letter weekday label used above the day grid.
    #[must_use]
    pub fn weekday_min(self, weekday: Weekday) -> &'static str {
        self.names().weekdays_min[weekday_index(weekday)]
    }

    #[must_use]
    pub fn trigger_label(self) -> &'static str {
        self.names().trigger
    }

    #[must_use]
    pub fn prev_month_label(self) -> &'static str {
        self.names().prev_month
    }

    #[must_use]
    pub fn next_month_label(self) -> &'static str {
        self.names().next_month
    }

    /// Match a month name (full or short) case-insensitively.
    ///
    /// A missing trailing dot on a short name is accepted.
    #[must_use]
    pub fn lookup_month(self, word: &str) -> Option<u32> {
        let word = word.to_lowercase();
        let names = self.names();
        let matches = |candidate: &str| {
            candidate.to_lowercase().trim_end_matches('.') == word.trim_end_matches('.')
        };
        names
            .months
            .iter()
            .position(|m| matches(m))
            .or_else(|| names.months_short.iter().position(|m| matches(m)))
            .and_then(|i| u32::try_from(i).ok())
    }
}

fn month_index(month0: u32) -> usize {
    usize::try_from(month0 % 12).unwrap_or_default()
}

fn weekday_index(weekday: Weekday) -> usize {
    usize::try_from(weekday.num_days_from_sunday()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_uses_primary_subtag() {
        assert_eq!(Locale::from_tag("nl"), Some(Locale::Nl));
        assert_eq!(Locale::from_tag("nl-BE"), Some(Locale::Nl));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_lookup_month() {
        assert_eq!(Locale::Nl.lookup_month("Maart"), Some(2));
        assert_eq!(Locale::Nl.lookup_month("mrt"), Some(2));
        assert_eq!(Locale::Nl.lookup_month("mrt."), Some(2));
        assert_eq!(Locale::En.lookup_month("march"), Some(2));
        assert_eq!(Locale::En.lookup_month("maart"), None);
    }

    #[test]
    fn test_weekday_tables_start_on_sunday() {
        assert_eq!(Locale::Nl.weekday_min(Weekday::Sun), "zo");
        assert_eq!(Locale::Nl.weekday_min(Weekday::Mon), "ma");
        assert_eq!(Locale::En.weekday_name(Weekday::Sat), "Saturday");
    }
}
