//! Month-length tables and leap-year rules for the Gregorian calendar.

use crate::error::CalendarError;

/// Largest day count each month can have (index 0 unused, index 1 = January, ..., index 12 = December).
///
/// February is listed with 29 days; use [`days_in_month`] for the count in a
/// specific year.
pub const MAX_DAYS_IN_MONTH: [u8; 13] = [0, 31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
///
/// A year is leap when divisible by 4, except century years, which are leap
/// only when divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the first leap year strictly after `year`.
///
/// Gaps between leap years never exceed eight years (e.g. 1896 → 1904), so
/// the search is short.
pub fn next_leap_year(year: i32) -> i32 {
    let mut candidate = year + 1;
    while !is_leap_year(candidate) {
        candidate += 1;
    }
    candidate
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && !is_leap_year(year) {
        return Ok(28);
    }
    Ok(MAX_DAYS_IN_MONTH[month as usize])
}
