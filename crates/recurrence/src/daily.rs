//! Daily rule: fixed step in days from the start date.

use cadence_calendar::CalendarDate;
use tracing::trace;

use crate::error::RecurrenceError;
use crate::rule::DailyRule;

/// Returns the next date of a `d <step>` rule.
///
/// When `now` is after `start`, this is the first `start + k * step` strictly
/// after `now`. Otherwise the start date is advanced by exactly one step, even
/// if it still lies in the future.
pub(crate) fn next_date(
    now: CalendarDate,
    start: CalendarDate,
    rule: DailyRule,
) -> Result<CalendarDate, RecurrenceError> {
    let step = u64::from(rule.step());
    if now <= start {
        return Ok(start.add_days(step)?);
    }
    let elapsed = now.days_since(start).unsigned_abs();
    let steps = elapsed / step + 1;
    trace!(elapsed, steps, "daily steps from start");
    Ok(start.add_days(steps * step)?)
}
