//! Salary timeline: monthly records and the progression engine

mod engine;
mod records;
mod state;

pub use engine::{SalaryProjector, DEARNESS_ALLOWANCE_RATE};
pub use records::{SalaryRecord, SalaryTimeline};
pub use state::ProgressionState;

use chrono::{Datelike, NaiveDate};

/// First day of the given calendar month.
pub fn month_start(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid calendar month")
}

/// Whole months from `a` to `b` under the first-of-month convention.
pub fn months_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b.year() - a.year()) as i64 * 12 + b.month() as i64 - a.month() as i64
}
