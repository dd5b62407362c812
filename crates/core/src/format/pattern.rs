//! Compiled moment-style date patterns.
//!
//! Supported tokens:
//! - `YYYY` four-digit year, `YY` two-digit year (pivot: `>68` is 19xx)
//! - `MMMM` full month name, `MMM` short month name, `MM` / `M` month number
//! - `DD` / `D` day of month
//! - `dddd` / `ddd` / `dd` weekday names, `d` weekday number (Sunday = 0)
//! - `[text]` escaped literal text
//!
//! Everything else is copied verbatim. Patterns whose output cannot be
//! split back into its fields are rejected: a variable-width `M` or `D`
//! directly next to another number, or a name running into letters.
//!
//! Parsing is lenient: separators are
//! skipped, literal mismatches are tolerated and trailing input is ignored.
//! Callers that need strictness compare the parsed date's formatted text
//! with the input (see [`crate::widget::sync::round_trip`]).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::locale::Locale;
use crate::calendar::DateValue;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("date pattern is empty")]
    Empty,

    #[error("date pattern '{pattern}' has no {missing} token")]
    Incomplete { pattern: String, missing: &'static str },

    #[error("date pattern '{pattern}' has fields that run together")]
    Ambiguous { pattern: String },
}

/// First and last year a `YY` field can name.
pub const TWO_DIGIT_YEARS: (i32, i32) = (1969, 2068);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Year4,
    Year2,
    MonthName,
    MonthShort,
    Month2,
    Month1,
    Day2,
    Day1,
    WeekdayName,
    WeekdayShort,
    WeekdayMin,
    WeekdayNumber,
    Literal(String),
}

impl Token {
    fn is_number(&self) -> bool {
        matches!(
            self,
            Token::Year4
                | Token::Year2
                | Token::Month2
                | Token::Month1
                | Token::Day2
                | Token::Day1
                | Token::WeekdayNumber
        )
    }

    fn is_variable_width(&self) -> bool {
        matches!(self, Token::Month1 | Token::Day1)
    }

    fn is_word(&self) -> bool {
        matches!(
            self,
            Token::MonthName
                | Token::MonthShort
                | Token::WeekdayName
                | Token::WeekdayShort
                | Token::WeekdayMin
        )
    }
}

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]|YYYY|YY|MMMM|MMM|MM|M|DD|D|dddd|ddd|dd|d")
        .expect("valid regex")
});

/// A date pattern used identically for formatting and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
    tokens: Vec<Token>,
}

impl DateFormat {
    /// Compile a pattern. It must contain a year, a month and a day token.
    ///
    /// # Errors
    ///
    /// [`FormatError::Empty`] and [`FormatError::Incomplete`] for patterns
    /// lacking a field, [`FormatError::Ambiguous`] when fields run together.
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        if pattern.is_empty() {
            return Err(FormatError::Empty);
        }

        let tokens = tokenize(pattern);
        let has = |pred: fn(&Token) -> bool| tokens.iter().any(pred);
        let missing = if !has(|t| matches!(t, Token::Year4 | Token::Year2)) {
            Some("year")
        } else if !has(|t| {
            matches!(t, Token::MonthName | Token::MonthShort | Token::Month2 | Token::Month1)
        }) {
            Some("month")
        } else if !has(|t| matches!(t, Token::Day2 | Token::Day1)) {
            Some("day")
        } else {
            None
        };

        if let Some(missing) = missing {
            return Err(FormatError::Incomplete { pattern: pattern.to_string(), missing });
        }
        if runs_together(&tokens) {
            return Err(FormatError::Ambiguous { pattern: pattern.to_string() });
        }

        Ok(Self { pattern: pattern.to_string(), tokens })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The years this pattern can write and read back, when it is limited.
    #[must_use]
    pub fn year_window(&self) -> Option<(i32, i32)> {
        self.tokens.contains(&Token::Year2).then_some(TWO_DIGIT_YEARS)
    }

    #[must_use]
    pub fn format(&self, date: DateValue, locale: Locale) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Year4 => {
                    if date.year() < 0 {
                        out.push_str(&format!("-{:04}", date.year().unsigned_abs()));
                    } else {
                        out.push_str(&format!("{:04}", date.year()));
                    }
                }
                Token::Year2 => out.push_str(&format!("{:02}", date.year().rem_euclid(100))),
                Token::MonthName => out.push_str(locale.month_name(date.month0())),
                Token::MonthShort => out.push_str(locale.month_short(date.month0())),
                Token::Month2 => out.push_str(&format!("{:02}", date.month0() + 1)),
                Token::Month1 => out.push_str(&(date.month0() + 1).to_string()),
                Token::Day2 => out.push_str(&format!("{:02}", date.day())),
                Token::Day1 => out.push_str(&date.day().to_string()),
                Token::WeekdayName => out.push_str(locale.weekday_name(date.weekday())),
                Token::WeekdayShort => out.push_str(locale.weekday_short(date.weekday())),
                Token::WeekdayMin => out.push_str(locale.weekday_min(date.weekday())),
                Token::WeekdayNumber => {
                    out.push_str(&date.weekday().num_days_from_sunday().to_string())
                }
                Token::Literal(text) => out.push_str(text),
            }
        }
        out
    }

    /// Leniently parse `text`. `None` if a component is missing or the date
    /// does not exist.
    #[must_use]
    pub fn parse(&self, text: &str, locale: Locale) -> Option<DateValue> {
        let mut rest = text;
        let mut year = None;
        let mut month0 = None;
        let mut day = None;

        for token in &self.tokens {
            match token {
                Token::Literal(lit) => {
                    rest = rest.strip_prefix(lit.as_str()).unwrap_or(rest);
                }
                Token::Year4 => {
                    let (n, r) = take_number(rest, 1, 4)?;
                    year = Some(i32::try_from(n).ok()?);
                    rest = r;
                }
                Token::Year2 => {
                    let (n, r) = take_number(rest, 2, 2)?;
                    let n = i32::try_from(n).ok()?;
                    let (first, _) = TWO_DIGIT_YEARS;
                    year = Some(if n >= first % 100 { 1900 + n } else { 2000 + n });
                    rest = r;
                }
                Token::Month2 | Token::Month1 => {
                    let (n, r) = take_number(rest, 1, 2)?;
                    if !(1..=12).contains(&n) {
                        return None;
                    }
                    month0 = Some(n - 1);
                    rest = r;
                }
                Token::MonthName | Token::MonthShort => {
                    let (word, r) = take_word(rest)?;
                    month0 = Some(locale.lookup_month(word)?);
                    rest = r;
                }
                Token::Day2 | Token::Day1 => {
                    let (n, r) = take_number(rest, 1, 2)?;
                    day = Some(n);
                    rest = r;
                }
                // Weekdays carry no information the date does not already
                // determine; consume and ignore.
                Token::WeekdayName | Token::WeekdayShort | Token::WeekdayMin => {
                    let (_, r) = take_word(rest)?;
                    rest = r;
                }
                Token::WeekdayNumber => {
                    let (_, r) = take_number(rest, 1, 1)?;
                    rest = r;
                }
            }
        }

        DateValue::from_ymd0(year?, month0?, day?)
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(pattern) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            tokens.push(Token::Literal(pattern[last..whole.start()].to_string()));
        }
        last = whole.end();

        let token = match whole.as_str() {
            "YYYY" => Token::Year4,
            "YY" => Token::Year2,
            "MMMM" => Token::MonthName,
            "MMM" => Token::MonthShort,
            "MM" => Token::Month2,
            "M" => Token::Month1,
            "DD" => Token::Day2,
            "D" => Token::Day1,
            "dddd" => Token::WeekdayName,
            "ddd" => Token::WeekdayShort,
            "dd" => Token::WeekdayMin,
            "d" => Token::WeekdayNumber,
            _ => Token::Literal(caps.get(1).map_or("", |m| m.as_str()).to_string()),
        };
        tokens.push(token);
    }

    if last < pattern.len() {
        tokens.push(Token::Literal(pattern[last..].to_string()));
    }
    tokens
}

/// Whether two adjacent fields would run together in formatted text.
fn runs_together(tokens: &[Token]) -> bool {
    let mut prev: Option<&Token> = None;
    let mut gap = String::new();
    for token in tokens {
        if let Token::Literal(text) = token {
            gap.push_str(text);
            continue;
        }
        if prev.is_some_and(|prev| joins(prev, &gap, Some(token))) {
            return true;
        }
        prev = Some(token);
        gap.clear();
    }
    prev.is_some_and(|prev| joins(prev, &gap, None))
}

fn joins(prev: &Token, gap: &str, next: Option<&Token>) -> bool {
    if prev.is_word() {
        return match gap.chars().next() {
            Some(c) => c.is_alphabetic(),
            None => next.is_some_and(Token::is_word),
        };
    }
    let Some(next) = next else {
        return false;
    };
    prev.is_number()
        && next.is_number()
        && (prev.is_variable_width() || next.is_variable_width())
        && gap.chars().all(|c| c.is_ascii_digit())
}

fn skip_separators(input: &str) -> &str {
    input.trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// Take between `min` and `max` ASCII digits after any separators.
fn take_number(input: &str, min: usize, max: usize) -> Option<(u32, &str)> {
    let input = skip_separators(input);
    let len = input.chars().take(max).take_while(char::is_ascii_digit).count();
    if len < min {
        return None;
    }
    let (digits, rest) = input.split_at(len);
    digits.parse().ok().map(|n| (n, rest))
}

/// Take an alphabetic word, including one trailing dot, after any separators.
fn take_word(input: &str) -> Option<(&str, &str)> {
    let input = skip_separators(input);
    let mut len: usize =
        input.chars().take_while(|c| c.is_alphabetic()).map(char::len_utf8).sum();
    if len == 0 {
        return None;
    }
    if input[len..].starts_with('.') {
        len += 1;
    }
    Some(input.split_at(len))
}
