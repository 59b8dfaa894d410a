//! # cadence-recurrence
//!
//! Next-due-date engine for recurring tasks.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["rule string"] -->|"RecurrenceRule::parse()"| B["RecurrenceRule"]
//!     B -->|"next_occurrence()"| C{"kind"}
//!     C -->|"d"| D["daily"]
//!     C -->|"w"| E["weekly"]
//!     C -->|"m"| F["monthly"]
//!     C -->|"y"| G["yearly"]
//!     D & E & F & G --> H["CalendarDate"]
//!     H -->|"next_date()"| I["\"YYYYMMDD\""]
//! ```
//!
//! Every computation is a pure function of `(now, start, rule)`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence_calendar::CalendarDate;
//! use cadence_recurrence::{Completion, complete, next_date};
//!
//! let now = CalendarDate::parse_compact("20240101").unwrap();
//! assert_eq!(next_date(now, "20240101", "d 5").unwrap(), "20240106");
//! assert_eq!(complete(now, "20240101", "").unwrap(), Completion::Remove);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `rule` | Rule grammar and validated rule types |
//! | `daily` | `d` rule calculator |
//! | `weekly` | `w` rule calculator |
//! | `monthly` | `m` rule calculator |
//! | `yearly` | `y` rule calculator |
//! | `engine` | Dispatch and the `YYYYMMDD` string boundary |
//! | `task` | Plan and complete workflows |
//! | `error` | Error types |

mod daily;
mod engine;
mod error;
mod monthly;
mod rule;
mod task;
mod weekly;
mod yearly;

pub use engine::{next_date, next_occurrence, parse_date};
pub use error::RecurrenceError;
pub use rule::{
    DailyRule, DayOfMonth, MAX_DAILY_STEP, MonthlyRule, RecurrenceRule, RuleKind, WeeklyRule,
};
pub use task::{Completion, Task, complete, plan};
