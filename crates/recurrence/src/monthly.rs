//! Monthly rule: listed days of the listed months.

use cadence_calendar::{
    CalendarDate, CalendarError, MAX_DAYS_IN_MONTH, days_in_month, is_leap_year,
    next_leap_year,
};
use tracing::trace;

use crate::error::RecurrenceError;
use crate::rule::{DayOfMonth, MonthlyRule, RecurrenceRule};

/// Returns the next date of an `m <days> [<months>]` rule.
///
/// The reference point is `now` when `now` is after `start`, and `start`
/// otherwise. Every (month, day) pair yields at most one candidate strictly
/// after the reference point; the earliest candidate wins. A pair whose next
/// occurrence falls past year 9999 is dropped.
///
/// # Errors
///
/// Returns [`RecurrenceError::NoOccurrence`] when no pair names a day that
/// exists (e.g. `m 30 2`), and [`RecurrenceError::Calendar`] when every pair
/// that exists falls past year 9999.
pub(crate) fn next_date(
    now: CalendarDate,
    start: CalendarDate,
    rule: &MonthlyRule,
) -> Result<CalendarDate, RecurrenceError> {
    let reference = if now > start { now } else { start };
    let mut best: Option<CalendarDate> = None;
    let mut out_of_range: Option<CalendarError> = None;
    for month in rule.months() {
        for day in rule.days() {
            let candidate = match candidate(reference, month, day) {
                Ok(Some(candidate)) => candidate,
                Ok(None) => continue,
                Err(e @ CalendarError::YearOutOfRange { .. }) => {
                    trace!(month, day = day.code(), "monthly candidate past year 9999");
                    out_of_range.get_or_insert(e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if best.is_none_or(|b| candidate < b) {
                best = Some(candidate);
            }
        }
    }
    let next = match (best, out_of_range) {
        (Some(next), _) => next,
        (None, Some(e)) => return Err(e.into()),
        (None, None) => {
            return Err(RecurrenceError::NoOccurrence {
                rule: RecurrenceRule::Monthly(rule.clone()).to_string(),
            });
        }
    };
    trace!(%reference, delta = next.days_since(reference), "monthly delta");
    Ok(next)
}

/// First date strictly after `reference` for one (month, day) pair.
///
/// Returns `None` when a fixed day exceeds the month's largest length, so the
/// pair can never occur.
fn candidate(
    reference: CalendarDate,
    month: u8,
    day: DayOfMonth,
) -> Result<Option<CalendarDate>, CalendarError> {
    let year = reference.year();
    match (month, day) {
        (2, DayOfMonth::Day(29)) => {
            let this_year = if is_leap_year(year) {
                Some(CalendarDate::new(year, 2, 29)?)
            } else {
                None
            };
            match this_year {
                Some(date) if date > reference => Ok(Some(date)),
                _ => Ok(Some(CalendarDate::new(next_leap_year(year), 2, 29)?)),
            }
        }
        // Last and second-to-last day of February move with the leap cycle,
        // so they are resolved against each candidate year separately.
        (2, DayOfMonth::Last | DayOfMonth::SecondToLast) => {
            let this_year = resolved(year, month, day)?;
            if this_year > reference {
                Ok(Some(this_year))
            } else {
                Ok(Some(resolved(year + 1, month, day)?))
            }
        }
        _ => {
            let Some(day) = day.resolve(MAX_DAYS_IN_MONTH[month as usize]) else {
                return Ok(None);
            };
            let this_year = CalendarDate::new(year, month, day)?;
            if this_year > reference {
                Ok(Some(this_year))
            } else {
                Ok(Some(CalendarDate::new(year + 1, month, day)?))
            }
        }
    }
}

fn resolved(year: i32, month: u8, day: DayOfMonth) -> Result<CalendarDate, CalendarError> {
    let month_len = days_in_month(year, month)?;
    // Only called for Last/SecondToLast, which always resolve.
    let day = day.resolve(month_len).unwrap_or(month_len);
    CalendarDate::new(year, month, day)
}
