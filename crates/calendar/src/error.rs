//! Error types for the cadence-calendar crate.

/// Error type for all fallible operations in the cadence-calendar crate.
///
/// This enum covers validation failures for month numbers, day-within-month
/// values and years, malformed `YYYYMMDD` strings, and arithmetic that would
/// leave the supported year range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year cannot be written with four digits.
    #[error("year out of range: {year} (must be 0..=9999)")]
    YearOutOfRange {
        /// The year that was provided or produced.
        year: i32,
    },

    /// Returned when a date string is not exactly eight ASCII digits.
    #[error("malformed date '{input}' (expected YYYYMMDD)")]
    Malformed {
        /// The rejected input.
        input: String,
    },

    /// Returned when date arithmetic leaves the representable range.
    #[error("date overflow: {reason}")]
    Overflow {
        /// Description of the operation that overflowed.
        reason: String,
    },
}
