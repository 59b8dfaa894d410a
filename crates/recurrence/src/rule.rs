//! Recurrence-rule grammar and validated rule types.
//!
//! A rule is a kind indicator followed by zero to two space-separated groups
//! of comma-separated integers:
//!
//! | Rule | Meaning |
//! |------|---------|
//! | `d <n>` | every `n` days, `n` in 1..=400 |
//! | `w <days>` | on the listed ISO weekdays, 1 = Monday .. 7 = Sunday |
//! | `m <days> [<months>]` | on the listed days (1..=31, `-1` last, `-2` second-to-last) of the listed months |
//! | `y` | every year on the start date's month and day |

use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::RecurrenceError;

/// Largest step accepted by a daily rule.
pub const MAX_DAILY_STEP: u16 = 400;

/// Rule kind, selected by the first token of the rule string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `d`: fixed step in days.
    Daily,
    /// `w`: set of weekdays.
    Weekly,
    /// `m`: set of month days, optionally filtered by month.
    Monthly,
    /// `y`: yearly on the start date.
    Yearly,
}

/// Kind indicators and the number of groups each kind accepts.
static RULE_KINDS: [(RuleKind, &str, RangeInclusive<usize>); 4] = [
    (RuleKind::Daily, "d", 1..=1),
    (RuleKind::Weekly, "w", 1..=1),
    (RuleKind::Monthly, "m", 1..=2),
    (RuleKind::Yearly, "y", 0..=0),
];

impl RuleKind {
    /// Looks up the kind for a rule indicator token.
    pub fn from_indicator(token: &str) -> Option<Self> {
        RULE_KINDS
            .iter()
            .find(|(_, indicator, _)| *indicator == token)
            .map(|(kind, _, _)| *kind)
    }

    /// Returns the single-character indicator for this kind.
    pub fn indicator(self) -> &'static str {
        self.entry().1
    }

    fn groups(self) -> RangeInclusive<usize> {
        self.entry().2.clone()
    }

    fn entry(self) -> &'static (RuleKind, &'static str, RangeInclusive<usize>) {
        // Every variant has exactly one table row.
        &RULE_KINDS[self as usize]
    }
}

/// A validated `d` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRule {
    step: u16,
}

impl DailyRule {
    /// Creates a daily rule advancing `step` days at a time.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::OutOfRange`] if `step` is not in 1..=400.
    pub(crate) fn new(step: i64) -> Result<Self, RecurrenceError> {
        let step = u16::try_from(step)
            .ok()
            .filter(|s| (1..=MAX_DAILY_STEP).contains(s))
            .ok_or(RecurrenceError::OutOfRange {
                field: "step",
                value: step,
                allowed: "1..=400",
            })?;
        Ok(Self { step })
    }

    /// Returns the step in days.
    pub fn step(self) -> u16 {
        self.step
    }
}

/// A validated `w` rule: a non-empty set of ISO weekday numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyRule {
    weekdays: BTreeSet<u8>,
}

impl WeeklyRule {
    /// Creates a weekly rule from ISO weekday numbers. Duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::OutOfRange`] if any value is not in 1..=7.
    pub(crate) fn new(values: &[i64]) -> Result<Self, RecurrenceError> {
        let weekdays = values
            .iter()
            .map(|&v| in_range(v, 1..=7, "weekday", "1..=7"))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { weekdays })
    }

    /// Returns the weekdays in ascending order.
    pub fn weekdays(&self) -> impl Iterator<Item = u8> + '_ {
        self.weekdays.iter().copied()
    }
}

/// Day selector of a monthly rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfMonth {
    /// A fixed day number, 1..=31.
    Day(u8),
    /// The last day of the month (`-1`).
    Last,
    /// The day before the last day of the month (`-2`).
    SecondToLast,
}

impl DayOfMonth {
    /// Decodes a rule value: 1..=31, `-1` or `-2`.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::OutOfRange`] for any other value.
    pub fn from_code(code: i64) -> Result<Self, RecurrenceError> {
        match code {
            -1 => Ok(DayOfMonth::Last),
            -2 => Ok(DayOfMonth::SecondToLast),
            _ => in_range(code, 1..=31, "day", "1..=31, -1, -2").map(DayOfMonth::Day),
        }
    }

    /// Returns the rule value this selector was parsed from.
    pub fn code(self) -> i64 {
        match self {
            DayOfMonth::Day(d) => i64::from(d),
            DayOfMonth::Last => -1,
            DayOfMonth::SecondToLast => -2,
        }
    }

    /// Resolves the selector against a month of `month_len` days.
    ///
    /// Returns `None` when a fixed day does not exist in that month.
    pub fn resolve(self, month_len: u8) -> Option<u8> {
        match self {
            DayOfMonth::Day(d) => (d <= month_len).then_some(d),
            DayOfMonth::Last => Some(month_len),
            DayOfMonth::SecondToLast => Some(month_len - 1),
        }
    }
}

/// A validated `m` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRule {
    days: BTreeSet<DayOfMonth>,
    months: BTreeSet<u8>,
}

impl MonthlyRule {
    /// Creates a monthly rule. An absent month group selects all twelve months.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::OutOfRange`] for day codes outside
    /// 1..=31/-1/-2 or months outside 1..=12.
    pub(crate) fn new(days: &[i64], months: Option<&[i64]>) -> Result<Self, RecurrenceError> {
        let days = days
            .iter()
            .map(|&d| DayOfMonth::from_code(d))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let months = match months {
            Some(values) => values
                .iter()
                .map(|&m| in_range(m, 1..=12, "month", "1..=12"))
                .collect::<Result<BTreeSet<_>, _>>()?,
            None => (1..=12).collect(),
        };
        Ok(Self { days, months })
    }

    /// Returns the day selectors.
    pub fn days(&self) -> impl Iterator<Item = DayOfMonth> + '_ {
        self.days.iter().copied()
    }

    /// Returns the selected months in ascending order.
    pub fn months(&self) -> impl Iterator<Item = u8> + '_ {
        self.months.iter().copied()
    }

    fn covers_all_months(&self) -> bool {
        self.months.len() == 12
    }
}

/// A parsed and validated recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// Every `step` days.
    Daily(DailyRule),
    /// On a set of weekdays.
    Weekly(WeeklyRule),
    /// On a set of month days within a set of months.
    Monthly(MonthlyRule),
    /// Every year on the start date.
    Yearly,
}

impl RecurrenceRule {
    /// Parses and validates a rule string.
    ///
    /// Structure (kind indicator and group count) is checked before any
    /// number is parsed.
    ///
    /// # Errors
    ///
    /// - [`RecurrenceError::NoRecurrence`] for an empty string.
    /// - [`RecurrenceError::InvalidRule`] for an unknown kind or a wrong
    ///   number of groups.
    /// - [`RecurrenceError::MalformedNumber`] for a non-integer token.
    /// - [`RecurrenceError::OutOfRange`] for a value outside its bounds.
    pub fn parse(rule: &str) -> Result<Self, RecurrenceError> {
        if rule.is_empty() {
            return Err(RecurrenceError::NoRecurrence);
        }
        let mut tokens = rule.split(' ');
        let indicator = tokens.next().unwrap_or_default();
        let groups: Vec<&str> = tokens.collect();

        let kind = RuleKind::from_indicator(indicator).ok_or_else(|| {
            invalid_rule(
                rule,
                format!("unknown rule kind '{indicator}' (expected d, w, m or y)"),
            )
        })?;
        if !kind.groups().contains(&groups.len()) {
            let expected = match kind {
                RuleKind::Daily | RuleKind::Weekly => "exactly one group",
                RuleKind::Monthly => "one or two groups",
                RuleKind::Yearly => "no groups",
            };
            return Err(invalid_rule(
                rule,
                format!("rule '{}' takes {expected}", kind.indicator()),
            ));
        }

        match kind {
            RuleKind::Daily => {
                let values = parse_group(groups[0])?;
                let [step] = values.as_slice() else {
                    return Err(invalid_rule(rule, "rule 'd' takes a single step value"));
                };
                DailyRule::new(*step).map(RecurrenceRule::Daily)
            }
            RuleKind::Weekly => {
                WeeklyRule::new(&parse_group(groups[0])?).map(RecurrenceRule::Weekly)
            }
            RuleKind::Monthly => {
                let days = parse_group(groups[0])?;
                let months = groups.get(1).map(|g| parse_group(g)).transpose()?;
                MonthlyRule::new(&days, months.as_deref()).map(RecurrenceRule::Monthly)
            }
            RuleKind::Yearly => Ok(RecurrenceRule::Yearly),
        }
    }

    /// Returns the kind of this rule.
    pub fn kind(&self) -> RuleKind {
        match self {
            RecurrenceRule::Daily(_) => RuleKind::Daily,
            RecurrenceRule::Weekly(_) => RuleKind::Weekly,
            RecurrenceRule::Monthly(_) => RuleKind::Monthly,
            RecurrenceRule::Yearly => RuleKind::Yearly,
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the canonical form: sorted, deduplicated groups, month group
/// omitted when it covers the whole year.
impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().indicator())?;
        match self {
            RecurrenceRule::Daily(rule) => write!(f, " {}", rule.step()),
            RecurrenceRule::Weekly(rule) => write!(f, " {}", join(rule.weekdays())),
            RecurrenceRule::Monthly(rule) => {
                write!(f, " {}", join(rule.days().map(DayOfMonth::code)))?;
                if !rule.covers_all_months() {
                    write!(f, " {}", join(rule.months()))?;
                }
                Ok(())
            }
            RecurrenceRule::Yearly => Ok(()),
        }
    }
}

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(",")
}

fn invalid_rule(rule: &str, reason: impl Into<String>) -> RecurrenceError {
    RecurrenceError::InvalidRule {
        rule: rule.to_string(),
        reason: reason.into(),
    }
}

/// Parses a comma-separated group of base-10 integers.
fn parse_group(group: &str) -> Result<Vec<i64>, RecurrenceError> {
    group
        .split(',')
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| RecurrenceError::MalformedNumber {
                    token: token.to_string(),
                })
        })
        .collect()
}

fn in_range(
    value: i64,
    range: RangeInclusive<u8>,
    field: &'static str,
    allowed: &'static str,
) -> Result<u8, RecurrenceError> {
    u8::try_from(value)
        .ok()
        .filter(|v| range.contains(v))
        .ok_or(RecurrenceError::OutOfRange {
            field,
            value,
            allowed,
        })
}
