//! Task workflows built on the engine: planning an edited task and
//! completing a task.

use std::fmt;

use cadence_calendar::CalendarDate;
use tracing::{debug, info};

use crate::engine::{next_occurrence, parse_date};
use crate::error::RecurrenceError;
use crate::rule::RecurrenceRule;

/// A task as the surrounding application stores it.
///
/// `date` is a `YYYYMMDD` string (empty means "today") and `repeat` a rule
/// string (empty means the task does not repeat).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    /// Short description; must not be empty.
    pub title: String,
    /// Due date, `YYYYMMDD`.
    pub date: String,
    /// Free-form note.
    pub comment: String,
    /// Recurrence rule, empty for one-off tasks.
    pub repeat: String,
}

impl Task {
    /// Validates the task and replaces its date with the date to store.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::EmptyTitle`] for an empty title, otherwise
    /// any error of [`plan`].
    pub fn plan(&mut self, now: CalendarDate) -> Result<(), RecurrenceError> {
        if self.title.is_empty() {
            return Err(RecurrenceError::EmptyTitle);
        }
        self.date = plan(now, &self.date, &self.repeat)?.to_string();
        Ok(())
    }

    /// Completes this task; see [`complete`].
    ///
    /// # Errors
    ///
    /// Any error of [`complete`].
    pub fn complete(&self, now: CalendarDate) -> Result<Completion, RecurrenceError> {
        complete(now, &self.date, &self.repeat)
    }
}

/// Outcome of completing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The task repeats; store it again with this date.
    Reschedule(CalendarDate),
    /// The task does not repeat; delete it.
    Remove,
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Reschedule(date) => write!(f, "{date}"),
            Completion::Remove => f.write_str("remove"),
        }
    }
}

/// Returns the date to store for a task that is being created or edited.
///
/// An empty `date` means today. A date after today is kept as is. A date of
/// today or earlier becomes today for one-off tasks and the next occurrence
/// for repeating ones.
///
/// # Errors
///
/// Returns [`RecurrenceError::InvalidDate`] for a malformed date, or any
/// engine error for a repeating task.
pub fn plan(now: CalendarDate, date: &str, repeat: &str) -> Result<CalendarDate, RecurrenceError> {
    let requested = if date.is_empty() {
        now
    } else {
        parse_date(date)?
    };
    if requested > now {
        return Ok(requested);
    }
    if repeat.is_empty() {
        debug!(%requested, "one-off task in the past moved to today");
        return Ok(now);
    }
    let rule = RecurrenceRule::parse(repeat)?;
    next_occurrence(now, requested, &rule)
}

/// Decides what happens to a task once it is done.
///
/// # Errors
///
/// Any engine error for a repeating task; a one-off task never fails.
pub fn complete(
    now: CalendarDate,
    date: &str,
    repeat: &str,
) -> Result<Completion, RecurrenceError> {
    if repeat.is_empty() {
        info!(date, "one-off task completed");
        return Ok(Completion::Remove);
    }
    let start = parse_date(date)?;
    let rule = RecurrenceRule::parse(repeat)?;
    let next = next_occurrence(now, start, &rule)?;
    info!(date, %next, "repeating task rescheduled");
    Ok(Completion::Reschedule(next))
}
