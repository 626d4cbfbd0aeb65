//! `MM-DD-YY` date parsing and calendar-day differences.
//!
//! Two-digit years are resolved with a fixed pivot so the result never
//! depends on the current date or a library default:
//!
//! | `YY`      | Year        |
//! |-----------|-------------|
//! | `00`–`68` | 2000–2068   |
//! | `69`–`99` | 1969–1999   |

use crate::domain::DayCounter;
use crate::error::DateParseError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex for the fixed `MM-DD-YY` format.
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})-([0-9]{2})-([0-9]{2})$").unwrap());

/// Two-digit years below this value belong to the 2000s.
pub const CENTURY_PIVOT: i32 = 69;

/// Maps a two-digit year onto a full year using [`CENTURY_PIVOT`].
pub fn expand_year(yy: i32) -> i32 {
    if yy < CENTURY_PIVOT {
        2000 + yy
    } else {
        1900 + yy
    }
}

/// Parses a `MM-DD-YY` string into a calendar date.
///
/// # Errors
///
/// Returns [`DateParseError::Format`] if the text is not exactly two ASCII
/// digits, hyphen, two digits, hyphen, two digits.
/// Returns [`DateParseError::InvalidDate`] for impossible dates such as
/// `13-01-20` or `02-30-20`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_date("07-04-20")?, NaiveDate::from_ymd_opt(2020, 7, 4).unwrap());
/// assert_eq!(parse_date("12-31-99")?, NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
/// assert!(parse_date("7-4-20").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let captures = DATE_REGEX
        .captures(input)
        .ok_or_else(|| DateParseError::Format {
            input: input.to_string(),
        })?;

    let field = |i: usize| -> Result<u32, DateParseError> {
        captures[i].parse().map_err(|_| DateParseError::Format {
            input: input.to_string(),
        })
    };

    let month = field(1)?;
    let day = field(2)?;
    let year = expand_year(field(3)? as i32);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateParseError::InvalidDate {
        input: input.to_string(),
    })
}

/// Returns the signed number of calendar days from `start` to `end`.
///
/// # Errors
///
/// Returns the [`DateParseError`] of the first string that fails to parse,
/// `start` first.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(elapsed_days("01-01-20", "01-02-20")?, 1);
/// assert_eq!(elapsed_days("01-02-20", "01-01-20")?, -1);
/// ```
pub fn elapsed_days(start: &str, end: &str) -> Result<i64, DateParseError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    Ok((end - start).num_days())
}

/// [`DayCounter`] backed by [`elapsed_days`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarDayCounter;

impl CalendarDayCounter {
    pub fn new() -> Self {
        Self
    }
}

impl DayCounter for CalendarDayCounter {
    fn elapsed_days(&self, start: &str, end: &str) -> Result<i64, DateParseError> {
        elapsed_days(start, end)
    }
}
