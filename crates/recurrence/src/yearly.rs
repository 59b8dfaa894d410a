//! Yearly rule: anniversaries of the start date.

use cadence_calendar::CalendarDate;

use crate::error::RecurrenceError;

/// Returns the next date of a `y` rule.
///
/// When `now` is after `start`, this is the first anniversary of `start` that
/// is not before `now` (it may equal `now`). Otherwise the start date moves
/// forward by one year.
pub(crate) fn next_date(
    now: CalendarDate,
    start: CalendarDate,
) -> Result<CalendarDate, RecurrenceError> {
    if now <= start {
        return anniversary(start, 1);
    }
    let years = (now.year() - start.year()).max(1).unsigned_abs();
    let next = anniversary(start, years)?;
    if next < now {
        return anniversary(start, years + 1);
    }
    Ok(next)
}

/// The `years`-th anniversary, `years >= 1`.
///
/// The first year is added on its own: a February 29 start rolls to March 1
/// there and stays on March 1 in every later year, leap or not.
fn anniversary(start: CalendarDate, years: u32) -> Result<CalendarDate, RecurrenceError> {
    Ok(start.add_years(1)?.add_years(years - 1)?)
}
