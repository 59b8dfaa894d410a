//! Rule dispatch and the `YYYYMMDD` string boundary.

use cadence_calendar::CalendarDate;
use tracing::debug;

use crate::error::RecurrenceError;
use crate::rule::RecurrenceRule;
use crate::{daily, monthly, weekly, yearly};

/// Computes the next due date for an already parsed rule.
///
/// # Errors
///
/// Returns [`RecurrenceError::NoOccurrence`] for monthly rules that name no
/// existing day, and [`RecurrenceError::Calendar`] if the result would fall
/// past year 9999.
pub fn next_occurrence(
    now: CalendarDate,
    start: CalendarDate,
    rule: &RecurrenceRule,
) -> Result<CalendarDate, RecurrenceError> {
    let next = match rule {
        RecurrenceRule::Daily(days) => daily::next_date(now, start, *days),
        RecurrenceRule::Weekly(weekdays) => weekly::next_date(now, start, weekdays),
        RecurrenceRule::Monthly(month_days) => monthly::next_date(now, start, month_days),
        RecurrenceRule::Yearly => yearly::next_date(now, start),
    }?;
    debug!(%now, %start, %rule, %next, "next occurrence");
    Ok(next)
}

/// Computes the next due date from raw strings.
///
/// `start` must be a `YYYYMMDD` date and `repeat` a rule string. The result
/// is formatted as `YYYYMMDD`.
///
/// # Errors
///
/// Checks run in this order and the first failure is returned:
/// [`RecurrenceError::NoRecurrence`] for an empty rule,
/// [`RecurrenceError::InvalidDate`] for a bad start date, any rule parse
/// error, then the failures of [`next_occurrence`].
pub fn next_date(now: CalendarDate, start: &str, repeat: &str) -> Result<String, RecurrenceError> {
    if repeat.is_empty() {
        return Err(RecurrenceError::NoRecurrence);
    }
    let start_date = parse_date(start)?;
    let rule = RecurrenceRule::parse(repeat)?;
    next_occurrence(now, start_date, &rule).map(|date| date.to_string())
}

/// Parses a `YYYYMMDD` date, mapping failures to [`RecurrenceError::InvalidDate`].
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] if `input` is not a valid date.
pub fn parse_date(input: &str) -> Result<CalendarDate, RecurrenceError> {
    CalendarDate::parse_compact(input).map_err(|e| RecurrenceError::invalid_date(input, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now(s: &str) -> CalendarDate {
        CalendarDate::parse_compact(s).unwrap()
    }

    #[test]
    fn dispatches_each_kind() {
        let today = now("20240104");
        assert_eq!(next_date(today, "20240101", "d 2").unwrap(), "20240105");
        assert_eq!(next_date(today, "20240101", "w 5").unwrap(), "20240105");
        assert_eq!(next_date(today, "20240101", "m 10").unwrap(), "20240110");
        assert_eq!(next_date(today, "20240101", "y").unwrap(), "20250101");
    }

    #[test]
    fn empty_rule_checked_before_date() {
        assert_eq!(
            next_date(now("20240101"), "garbage", "").unwrap_err(),
            RecurrenceError::NoRecurrence
        );
    }

    #[test]
    fn date_checked_before_rule() {
        let err = next_date(now("20240101"), "2024-01-01", "x 1").unwrap_err();
        assert!(matches!(err, RecurrenceError::InvalidDate { .. }));
    }

    #[test]
    fn invalid_date_keeps_input() {
        let err = parse_date("20241301").unwrap_err();
        assert_eq!(
            err,
            RecurrenceError::InvalidDate {
                input: "20241301".to_string(),
                reason: "invalid month: 13 (must be 1..=12)".to_string(),
            }
        );
    }

    #[test]
    fn typed_and_string_paths_agree() {
        let today = now("20230301");
        let rule = RecurrenceRule::parse("m 29,-1 2").unwrap();
        let typed = next_occurrence(today, now("20230101"), &rule).unwrap();
        assert_eq!(
            typed.to_string(),
            next_date(today, "20230101", "m 29,-1 2").unwrap()
        );
    }
}
