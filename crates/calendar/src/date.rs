//! Gregorian calendar date with a fixed-width `YYYYMMDD` representation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Utc};

use crate::error::CalendarError;
use crate::month::days_in_month;

/// Earliest and latest year that fit the eight-digit wire format.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A calendar date without time-of-day, in years 0..=9999.
///
/// Ordering is the natural `(year, month, day)` order. Every value renders
/// as exactly eight digits through [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for years outside 0..=9999,
    /// [`CalendarError::InvalidMonth`] for months outside 1..=12, and
    /// [`CalendarError::InvalidDay`] if the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            })
    }

    /// Parses a fixed-width `YYYYMMDD` string.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Malformed`] unless `input` is exactly eight
    /// ASCII digits, then any error [`CalendarDate::new`] reports.
    pub fn parse_compact(input: &str) -> Result<Self, CalendarError> {
        let bytes = input.as_bytes();
        if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(CalendarError::Malformed {
                input: input.to_string(),
            });
        }
        let field = |range: std::ops::Range<usize>| {
            bytes[range]
                .iter()
                .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'))
        };
        let year = field(0..4);
        // Two digits always fit in a u8.
        let month = field(4..6) as u8;
        let day = field(6..8) as u8;
        Self::new(year, month, day)
    }

    /// Wraps a chrono date, checking that its year fits the wire format.
    ///
    /// Date-times should be reduced with `date_naive()` first, which drops
    /// the time-of-day component.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] for years outside 0..=9999.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        let year = date.year();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange { year });
        }
        Ok(Self(date))
    }

    /// Returns today's date in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the system clock is set
    /// outside 0..=9999.
    pub fn today_utc() -> Result<Self, CalendarError> {
        Self::from_naive(Utc::now().date_naive())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the ISO weekday number, 1 = Monday through 7 = Sunday.
    pub fn weekday(self) -> u8 {
        self.0.weekday().number_from_monday() as u8
    }

    /// Returns the date `days` days later.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Overflow`] or [`CalendarError::YearOutOfRange`]
    /// if the result is past year 9999.
    pub fn add_days(self, days: u64) -> Result<Self, CalendarError> {
        let next = self
            .0
            .checked_add_days(Days::new(days))
            .ok_or_else(|| CalendarError::Overflow {
                reason: format!("adding {days} days to {self}"),
            })?;
        Self::from_naive(next)
    }

    /// Returns the signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        (self.0 - earlier.0).num_days()
    }

    /// Returns the same month and day `years` years later.
    ///
    /// February 29 carried into a common year rolls over to March 1, the
    /// usual calendar normalization.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] if the result is past year 9999.
    pub fn add_years(self, years: u32) -> Result<Self, CalendarError> {
        let year = i32::try_from(years)
            .ok()
            .and_then(|y| self.year().checked_add(y))
            .ok_or_else(|| CalendarError::Overflow {
                reason: format!("adding {years} years to {self}"),
            })?;
        match Self::new(year, self.month(), self.day()) {
            Err(CalendarError::InvalidDay { month: 2, .. }) => Self::new(year, 3, 1),
            other => other,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_compact(s)
    }
}
