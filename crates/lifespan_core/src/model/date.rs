//! Calendar date normalization for raw knowledge-base tokens.
//!
//! # Responsibility
//! - Turn `YYYY-MM-DD` tokens (with `00` placeholders) into real dates.
//! - Report every malformed token as `Unparsable` instead of panicking.
//!
//! # Invariants
//! - A `CalendarDate` is always a valid proleptic Gregorian date.
//! - `00` month/day segments normalize to `1`; missing segments too.
//! - The year segment is mandatory and must be an integer.

use chrono::{Datelike, Local, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DATE_SEPARATOR: char = '-';
const UNKNOWN_SEGMENT: &str = "00";

/// Normalized (year, month, day) triple.
///
/// Only constructed by [`parse_date_token`] and [`CalendarDate::today`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns the local calendar date of the running process.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Fractional year position, e.g. 1700-07-02 is roughly 1700.5.
    /// Renderers use it as the linear time axis.
    pub fn fractional_year(&self) -> f64 {
        let days_in_year = if is_leap_year(self.year()) { 366.0 } else { 365.0 };
        f64::from(self.year()) + f64::from(self.0.ordinal0()) / days_in_year
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

/// Token rejected by [`parse_date_token`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unparsable {
    pub token: String,
}

impl Display for Unparsable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unparsable date token `{}`", self.token)
    }
}

impl Error for Unparsable {}

/// Parses a raw date token into a [`CalendarDate`].
///
/// Rules:
/// - surrounding whitespace is ignored;
/// - segment 0 is the year and must parse as an integer;
/// - segments 1 and 2 are month and day; absent or `00` means `1`;
/// - anything after the third segment is ignored;
/// - the resulting triple must be a real calendar date.
pub fn parse_date_token(token: &str) -> Result<CalendarDate, Unparsable> {
    let unparsable = || Unparsable {
        token: token.to_string(),
    };

    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(unparsable());
    }

    let mut segments = trimmed.split(DATE_SEPARATOR);
    let year = segments
        .next()
        .and_then(|segment| segment.parse::<i32>().ok())
        .ok_or_else(unparsable)?;
    let month = parse_optional_segment(segments.next()).ok_or_else(unparsable)?;
    let day = parse_optional_segment(segments.next()).ok_or_else(unparsable)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .map(CalendarDate)
        .ok_or_else(unparsable)
}

fn parse_optional_segment(segment: Option<&str>) -> Option<u32> {
    match segment {
        None => Some(1),
        Some(UNKNOWN_SEGMENT) => Some(1),
        Some(value) => value.parse::<u32>().ok(),
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
