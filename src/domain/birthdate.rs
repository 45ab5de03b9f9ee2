//! Birthdate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How many digits a layout expects for the year.
#[derive(Debug, Clone, Copy)]
enum YearDigits {
    Four,
    Two,
}

/// An accepted input layout.
struct Layout {
    format: &'static str,
    year: YearDigits,
    /// The layout has no day; the first of the month is assumed.
    month_only: bool,
}

impl Layout {
    const fn full(format: &'static str) -> Self {
        Self {
            format,
            year: YearDigits::Four,
            month_only: false,
        }
    }

    const fn short_year(format: &'static str) -> Self {
        Self {
            format,
            year: YearDigits::Two,
            month_only: false,
        }
    }

    /// Parse `input` with this layout.
    ///
    /// `%Y` in chrono also accepts fewer than four digits, so a parse only
    /// counts if the year it produced is written out in `input` with the
    /// expected number of digits. Without that check `Jan 1990` would read
    /// as day 19 of year 90.
    fn parse(&self, input: &str) -> Option<NaiveDate> {
        let date = if self.month_only {
            NaiveDate::parse_from_str(&format!("1 {}", input), self.format).ok()?
        } else {
            NaiveDate::parse_from_str(input, self.format).ok()?
        };

        match self.year {
            YearDigits::Four => has_digit_run(input, 4, date.year()).then_some(date),
            YearDigits::Two => {
                let short = date.year().rem_euclid(100);
                if !has_digit_run(input, 2, short) {
                    return None;
                }
                date.with_year(window_two_digit_year(short))
            }
        }
    }
}

/// Accepted input layouts, tried in order.
///
/// `%B` accepts both short and long month names, case-insensitively.
/// Numeric layouts are day-first.
const INPUT_LAYOUTS: &[Layout] = &[
    Layout::full("%Y-%m-%d"),
    Layout::full("%Y/%m/%d"),
    Layout::full("%d %B %Y"),
    Layout::full("%d-%B-%Y"),
    Layout::full("%B %d, %Y"),
    Layout::full("%B %d %Y"),
    Layout::full("%d/%m/%Y"),
    Layout::full("%d-%m-%Y"),
    Layout::full("%d.%m.%Y"),
    Layout::short_year("%d %B %y"),
    Layout::short_year("%d-%B-%y"),
    Layout::short_year("%B %d, %y"),
    Layout::short_year("%d/%m/%y"),
    Layout::short_year("%d-%m-%y"),
    Layout::short_year("%d.%m.%y"),
    Layout {
        format: "%d %B %Y",
        year: YearDigits::Four,
        month_only: true,
    },
];

/// Two-digit years at or above this fall in the 1900s, below it in the 2000s.
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("Failed to compile digit run regex"));

/// Whether `input` contains a run of exactly `len` digits whose value is `value`.
fn has_digit_run(input: &str, len: usize, value: i32) -> bool {
    DIGIT_RUN
        .find_iter(input)
        .map(|m| m.as_str())
        .any(|run| run.len() == len && run.parse::<i32>().ok() == Some(value))
}

fn window_two_digit_year(short: i32) -> i32 {
    if short >= TWO_DIGIT_YEAR_PIVOT {
        1900 + short
    } else {
        2000 + short
    }
}

/// Layout used for display, e.g. `01 Jan 1990`.
const DISPLAY_FORMAT: &str = "%d %b %Y";

/// Layout used for serialization.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// A contact's date of birth.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthdate;
///
/// let date = Birthdate::parse("1 Jan 1990").unwrap();
/// assert_eq!(date.to_string(), "01 Jan 1990");
/// assert_eq!(date, Birthdate::parse("1990-01-01").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Parse free text as a calendar date.
    ///
    /// Leading and trailing whitespace is ignored. Two-digit years are read
    /// as 1950 to 2049, and a month with no day means the first of the month.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if no accepted layout matches or
    /// the date does not exist (e.g. `30 Feb 1990`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        INPUT_LAYOUTS
            .iter()
            .find_map(|layout| layout.parse(trimmed))
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate(input.to_string()))
    }

    /// Build a birthdate from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }
}

impl Serialize for Birthdate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.format(ISO_FORMAT).to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthdate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthdate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> Birthdate {
        Birthdate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_birthdate_parses_accepted_layouts() {
        let expected = ymd(1990, 1, 1);
        assert_eq!(Birthdate::parse("1990-01-01").unwrap(), expected);
        assert_eq!(Birthdate::parse("1990/01/01").unwrap(), expected);
        assert_eq!(Birthdate::parse("1 Jan 1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("01 jan 1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("1 January 1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("01-Jan-1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("Jan 1, 1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("January 1 1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("01/01/1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("01-01-1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("01.01.1990").unwrap(), expected);
        assert_eq!(Birthdate::parse("  1 Jan 1990  ").unwrap(), expected);
        assert_eq!(Birthdate::parse("December 25, 1996").unwrap(), ymd(1996, 12, 25));
        assert_eq!(Birthdate::parse("25 december 1996").unwrap(), ymd(1996, 12, 25));
    }

    #[test]
    fn test_birthdate_month_and_year_means_first_of_month() {
        assert_eq!(Birthdate::parse("Jan 1990").unwrap(), ymd(1990, 1, 1));
        assert_eq!(Birthdate::parse("March 1985").unwrap(), ymd(1985, 3, 1));
    }

    #[test]
    fn test_birthdate_two_digit_years_are_windowed() {
        assert_eq!(Birthdate::parse("1/1/90").unwrap(), ymd(1990, 1, 1));
        assert_eq!(Birthdate::parse("1 Jan 90").unwrap(), ymd(1990, 1, 1));
        assert_eq!(Birthdate::parse("5 Mar 85").unwrap(), ymd(1985, 3, 5));
        assert_eq!(Birthdate::parse("03.04.05").unwrap(), ymd(2005, 4, 3));
        assert_eq!(Birthdate::parse("29/02/96").unwrap(), ymd(1996, 2, 29));
    }

    #[test]
    fn test_birthdate_never_lands_in_first_century() {
        for input in ["Jan 1990", "1/1/90", "1 Jan 90", "5 Mar 85", "Jan 1, 90"] {
            let date = Birthdate::parse(input).unwrap();
            assert!(date.0.year() >= 1950, "{input} parsed as {date}");
        }
    }

    #[test]
    fn test_birthdate_rejects_odd_year_widths() {
        assert!(Birthdate::parse("1/1/990").is_err());
        assert!(Birthdate::parse("1 Jan 9").is_err());
        assert!(Birthdate::parse("1990-1-1-1").is_err());
    }

    #[test]
    fn test_birthdate_numeric_layout_is_day_first() {
        assert_eq!(Birthdate::parse("12/05/1985").unwrap(), ymd(1985, 5, 12));
    }

    #[test]
    fn test_birthdate_rejects_garbage() {
        assert!(Birthdate::parse("").is_err());
        assert!(Birthdate::parse("yesterday").is_err());
        assert!(Birthdate::parse("30 Feb 1990").is_err());
        assert!(Birthdate::parse("1990-13-01").is_err());
        assert!(Birthdate::parse("1 Jan").is_err());
    }

    #[test]
    fn test_birthdate_error_carries_input() {
        let err = Birthdate::parse("soon").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("soon".to_string()));
    }

    #[test]
    fn test_birthdate_from_ymd_rejects_impossible_date() {
        assert!(Birthdate::from_ymd(2023, 2, 29).is_err());
        assert!(Birthdate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_birthdate_display() {
        assert_eq!(ymd(1996, 12, 25).to_string(), "25 Dec 1996");
        assert_eq!(ymd(1990, 1, 1).to_string(), "01 Jan 1990");
    }

    #[test]
    fn test_birthdate_serialization() {
        let json = serde_json::to_string(&ymd(1985, 5, 12)).unwrap();
        assert_eq!(json, "\"1985-05-12\"");
    }

    #[test]
    fn test_birthdate_deserialization_invalid_fails() {
        let result: Result<Birthdate, _> = serde_json::from_str("\"not a date\"");
        assert!(result.is_err());
    }
}
