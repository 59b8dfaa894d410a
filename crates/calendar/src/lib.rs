//! # cadence-calendar
//!
//! Gregorian date arithmetic and the fixed-width `YYYYMMDD` codec.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["\"YYYYMMDD\""] -->|"CalendarDate::parse_compact()"| B["CalendarDate"]
//!     B -->|"Display"| A
//!     B -->|".add_days() / .add_years()"| B
//!     C["(year, month)"] -->|"days_in_month()"| D["day count"]
//!     E["year"] -->|"is_leap_year() / next_leap_year()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cadence_calendar::{CalendarDate, days_in_month, is_leap_year};
//!
//! let date = CalendarDate::parse_compact("20240228").unwrap();
//! assert_eq!(date.add_days(1).unwrap().to_string(), "20240229");
//! assert!(is_leap_year(2024));
//! assert_eq!(days_in_month(2023, 2).unwrap(), 28);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar date and `YYYYMMDD` codec |
//! | `month` | Month-length tables and leap-year rules |
//! | `error` | Error types |

mod date;
mod error;
mod month;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use month::{MAX_DAYS_IN_MONTH, days_in_month, is_leap_year, next_leap_year};
