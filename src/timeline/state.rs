//! Progression state for the month-by-month salary walk

use chrono::{Datelike, NaiveDate};

use super::month_start;

/// Mutable state carried across months of the salary projection.
///
/// The increment counter runs on the employment clock: the first increment
/// lands in the first designated increment month after joining, and at most
/// one is granted per calendar year.
#[derive(Debug, Clone)]
pub struct ProgressionState {
    /// Month currently being emitted
    pub current: NaiveDate,

    /// Annual increments granted so far
    pub increment_count: u32,

    /// Year of the most recent increment, if any
    pub last_increment_year: Option<i32>,
}

impl ProgressionState {
    pub fn new(joining_date: NaiveDate) -> Self {
        Self {
            current: month_start(joining_date.year(), joining_date.month()),
            increment_count: 0,
            last_increment_year: None,
        }
    }

    /// Grant the annual increment if this is the designated month and none
    /// has been granted this year. Returns whether one was granted.
    pub fn grant_increment_if_due(&mut self, increment_month: u32) -> bool {
        let due = self.current.month() == increment_month
            && self
                .last_increment_year
                .map_or(true, |year| self.current.year() > year);
        if due {
            self.increment_count += 1;
            self.last_increment_year = Some(self.current.year());
        }
        due
    }

    /// Step to the first day of the next month.
    pub fn advance_month(&mut self) {
        self.current = if self.current.month() == 12 {
            month_start(self.current.year() + 1, 1)
        } else {
            month_start(self.current.year(), self.current.month() + 1)
        };
    }
}
