//! Salary timeline output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::month_start;
use crate::params::SchemeParameters;

/// One month of the simulated career.
///
/// Produced in order by the salary projector; the three corpus fields start
/// at zero and are filled in place by the corpus accumulators. Nothing else
/// is ever mutated after emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRecord {
    pub year: i32,
    pub month: u32,

    /// Pay level occupied this month
    pub pay_level: u8,

    /// Months already spent in the tier (negative while the seniority clock
    /// trails the queried month)
    pub months_in_tier: i64,

    /// Annual increments granted so far
    pub increment_count: u32,

    /// Basic pay after increments
    pub basic_pay: f64,

    /// Basic pay plus allowance loading
    pub gross_salary: f64,

    /// Defined-contribution corpus through this month
    pub nps_corpus: f64,

    /// Employee's corpus tracked under the guaranteed scheme
    pub individual_corpus: f64,

    /// Notional benchmark corpus of the guaranteed scheme
    pub benchmark_corpus: f64,
}

impl SalaryRecord {
    /// First day of this record's calendar month.
    pub fn date(&self) -> NaiveDate {
        month_start(self.year, self.month)
    }
}

/// Ordered, append-only sequence of salary records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryTimeline {
    pub records: Vec<SalaryRecord>,
}

impl SalaryTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn push(&mut self, record: SalaryRecord) {
        self.records.push(record);
    }

    pub fn first(&self) -> Option<&SalaryRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&SalaryRecord> {
        self.records.last()
    }

    /// Latest record at or before the given calendar month.
    pub fn record_at_or_before(&self, year: i32, month: u32) -> Option<&SalaryRecord> {
        let idx = self
            .records
            .partition_point(|r| (r.year, r.month) <= (year, month));
        if idx == 0 {
            None
        } else {
            Some(&self.records[idx - 1])
        }
    }

    /// Average gross salary over the (up to) twelve months ending at the
    /// given calendar month. Zero when no records precede it.
    pub fn average_gross_last_12(&self, year: i32, month: u32) -> f64 {
        let end = self
            .records
            .partition_point(|r| (r.year, r.month) <= (year, month));
        if end == 0 {
            return 0.0;
        }
        let window = &self.records[end.saturating_sub(12)..end];
        window.iter().map(|r| r.gross_salary).sum::<f64>() / window.len() as f64
    }

    /// Months of service from the first record to the given calendar month.
    pub fn service_months_until(&self, year: i32, month: u32) -> Option<i64> {
        let first = self.first()?;
        Some((year - first.year) as i64 * 12 + month as i64 - first.month as i64)
    }

    /// Display slice of the progression: the first and last months, every
    /// January, revaluation months of pay-commission years, and the months
    /// where an increment landed.
    pub fn key_months(&self, params: &SchemeParameters) -> Vec<&SalaryRecord> {
        let mut selected = Vec::new();
        let mut prev_increments = None;
        for (i, record) in self.records.iter().enumerate() {
            let is_key = i == 0
                || i == self.records.len() - 1
                || record.month == 1
                || (record.month == params.revaluation_month
                    && params.is_pay_commission_year(record.year))
                || (record.month == params.increment_month
                    && prev_increments != Some(record.increment_count));
            if is_key {
                selected.push(record);
            }
            prev_increments = Some(record.increment_count);
        }
        selected
    }
}
