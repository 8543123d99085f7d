//! Salary progression projector
//!
//! Walks one calendar month at a time from joining to retirement, applying
//! pay-commission revaluation, annual increments, and seniority-based tier
//! placement, and emits one `SalaryRecord` per month.

use chrono::Datelike;
use log::debug;

use super::records::{SalaryRecord, SalaryTimeline};
use super::state::ProgressionState;
use super::{month_start, months_between};
use crate::assumptions::{Assumptions, ANNUAL_INCREMENT_RATE};
use crate::error::SimulationError;
use crate::params::SchemeParameters;
use crate::profile::EmployeeProfile;

/// Dearness allowance loading on basic pay.
pub const DEARNESS_ALLOWANCE_RATE: f64 = 0.53;

/// Month-by-month salary state machine.
///
/// Owns its assumptions because the pay matrix is revalued in place during
/// the walk; callers hand in a clone and keep their base copy pristine.
pub struct SalaryProjector<'a> {
    assumptions: Assumptions,
    params: &'a SchemeParameters,
}

impl<'a> SalaryProjector<'a> {
    pub fn new(assumptions: Assumptions, params: &'a SchemeParameters) -> Self {
        Self { assumptions, params }
    }

    /// Project the salary timeline from joining through the retirement month
    /// inclusive. A retirement date before joining yields an empty timeline.
    ///
    /// Tier placement runs on the seniority clock, increments on the
    /// employment clock; the two differ whenever seniority was granted
    /// retroactively.
    pub fn project(
        &mut self,
        profile: &EmployeeProfile,
    ) -> Result<SalaryTimeline, SimulationError> {
        let mut timeline = SalaryTimeline::new();
        let retirement = profile.retirement_date();
        let joining = month_start(profile.joining_date.year(), profile.joining_date.month());
        if retirement < joining {
            return Ok(timeline);
        }

        let mut state = ProgressionState::new(profile.joining_date);
        while state.current <= retirement {
            let year = state.current.year();
            let month = state.current.month();

            if month == self.params.revaluation_month && self.params.is_pay_commission_year(year)
            {
                self.assumptions.pay_matrix.revalue(self.params.fitment_factor);
                debug!("revalued pay matrix in {}-{:02}", year, month);
            }

            state.grant_increment_if_due(self.params.increment_month);

            let seniority_months = months_between(profile.seniority_date, state.current);
            let (level, months_in_tier) = {
                let (tier, months) = self.assumptions.pay_matrix.tier_for_service(seniority_months);
                (tier.level, months)
            };

            let basic_pay = self.assumptions.pay_matrix.basic_pay_for_level(level)?
                * (1.0 + ANNUAL_INCREMENT_RATE).powi(state.increment_count as i32);
            let gross_salary = basic_pay * (1.0 + DEARNESS_ALLOWANCE_RATE);

            timeline.push(SalaryRecord {
                year,
                month,
                pay_level: level,
                months_in_tier,
                increment_count: state.increment_count,
                basic_pay,
                gross_salary,
                nps_corpus: 0.0,
                individual_corpus: 0.0,
                benchmark_corpus: 0.0,
            });

            state.advance_month();
        }

        debug!(
            "projected {} salary months through {}",
            timeline.len(),
            retirement
        );
        Ok(timeline)
    }
}
