//! Weekly rule: next matching ISO weekday.

use cadence_calendar::CalendarDate;
use tracing::trace;

use crate::error::RecurrenceError;
use crate::rule::WeeklyRule;

const DAYS_IN_WEEK: i8 = 7;

/// Returns the next date of a `w <days>` rule.
///
/// The anchor weekday is taken from `now` when `now` is after `start`, and
/// from `start` otherwise. The shortest forward distance (1..=7) from the
/// anchor to any listed weekday is always added to `now`.
pub(crate) fn next_date(
    now: CalendarDate,
    start: CalendarDate,
    rule: &WeeklyRule,
) -> Result<CalendarDate, RecurrenceError> {
    let anchor = if now > start {
        now.weekday()
    } else {
        start.weekday()
    };
    let delta = rule
        .weekdays()
        .map(|weekday| forward_distance(anchor, weekday))
        .min()
        .unwrap_or(DAYS_IN_WEEK);
    trace!(anchor, delta, "weekly distance");
    Ok(now.add_days(delta.unsigned_abs().into())?)
}

/// Days from `anchor` forward to `target`, in 1..=7 (same weekday is a full week).
fn forward_distance(anchor: u8, target: u8) -> i8 {
    let diff = target as i8 - anchor as i8;
    if diff > 0 && diff < DAYS_IN_WEEK {
        diff
    } else {
        diff + DAYS_IN_WEEK
    }
}
