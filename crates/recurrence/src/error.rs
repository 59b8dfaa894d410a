//! Error types for cadence-recurrence.

use cadence_calendar::CalendarError;

/// Error type for all fallible operations in the cadence-recurrence crate.
///
/// Parsing failures (`InvalidRule`, `MalformedNumber`, `OutOfRange`) are
/// reported before any date arithmetic runs. `NoRecurrence` is not a fault of
/// the engine: it tells the caller that the task does not repeat.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecurrenceError {
    /// Returned when the rule string is empty.
    #[error("no recurrence rule")]
    NoRecurrence,

    /// Returned when a date string is not a valid `YYYYMMDD` date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The rejected date string.
        input: String,
        /// Description of what was wrong with it.
        reason: String,
    },

    /// Returned for an unknown rule kind or a wrong number of groups.
    #[error("invalid rule '{rule}': {reason}")]
    InvalidRule {
        /// The rejected rule string.
        rule: String,
        /// Description of the structural problem.
        reason: String,
    },

    /// Returned when a comma-separated group holds a non-integer token.
    #[error("malformed number '{token}' in rule")]
    MalformedNumber {
        /// The token that failed to parse.
        token: String,
    },

    /// Returned when a number violates the bound for its position in the rule.
    #[error("{field} value {value} out of range (allowed: {allowed})")]
    OutOfRange {
        /// Which rule parameter the value belongs to.
        field: &'static str,
        /// The offending value.
        value: i64,
        /// Human-readable description of the allowed values.
        allowed: &'static str,
    },

    /// Returned when a monthly rule names only day/month pairs that never exist.
    #[error("rule '{rule}' never produces a date")]
    NoOccurrence {
        /// The rule that has no valid (month, day) pair.
        rule: String,
    },

    /// Wraps a calendar failure, such as a result past year 9999.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned by the planning workflow when a task has no title.
    #[error("task title is empty")]
    EmptyTitle,
}

impl From<CalendarError> for RecurrenceError {
    fn from(e: CalendarError) -> Self {
        RecurrenceError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl RecurrenceError {
    /// Builds an [`RecurrenceError::InvalidDate`] from a calendar parse failure.
    pub(crate) fn invalid_date(input: &str, cause: &CalendarError) -> Self {
        RecurrenceError::InvalidDate {
            input: input.to_string(),
            reason: cause.to_string(),
        }
    }
}
