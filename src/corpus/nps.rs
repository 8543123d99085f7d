//! Defined-contribution corpus accumulation
//!
//! A single forward fold over the salary timeline: each month's contribution
//! joins the corpus, which then earns one month of the glide-path-blended
//! return. No backward dependency; fully deterministic given the rates.

use log::debug;

use crate::assumptions::Assumptions;
use crate::params::SchemeParameters;
use crate::timeline::SalaryTimeline;

/// Fills `nps_corpus` on every record of a timeline.
pub struct NpsAccumulator<'a> {
    assumptions: &'a Assumptions,
    params: &'a SchemeParameters,
}

impl<'a> NpsAccumulator<'a> {
    pub fn new(assumptions: &'a Assumptions, params: &'a SchemeParameters) -> Self {
        Self { assumptions, params }
    }

    /// Run the fold, writing the running corpus into each record in place.
    pub fn accumulate(&self, timeline: &mut SalaryTimeline) {
        let Some(first) = timeline.first() else {
            return;
        };
        let (first_year, first_month) = (first.year, first.month);

        let mut corpus = 0.0;
        for record in timeline.records.iter_mut() {
            // Glide path runs on fractional years since joining
            let age_years = (record.year - first_year) as f64
                + (record.month as f64 - first_month as f64) / 12.0;

            let monthly_return = self.params.lifecycle_fund.blended_monthly_return(
                age_years,
                self.params.equity_return,
                self.params.corporate_bond_return,
                self.params.gsec_return,
            );

            let contribution =
                record.gross_salary * self.assumptions.contributions.nps_rate(record.year);

            corpus = (corpus + contribution) * (1.0 + monthly_return);
            record.nps_corpus = corpus;
        }

        debug!(
            "accumulated NPS corpus over {} months under {}",
            timeline.len(),
            self.params.lifecycle_fund.code()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::ContributionSchedule;
    use crate::profile::EmployeeProfile;
    use crate::timeline::{month_start, SalaryProjector};
    use approx::assert_relative_eq;

    fn short_career_profile() -> EmployeeProfile {
        EmployeeProfile::new(
            month_start(1990, 6),
            month_start(2023, 12),
            month_start(2023, 12),
            60,
            35,
            10,
        )
    }

    fn zero_return_params() -> SchemeParameters {
        SchemeParameters {
            equity_return: 0.0,
            corporate_bond_return: 0.0,
            gsec_return: 0.0,
            ..SchemeParameters::default()
        }
    }

    /// Contribution schedule pinned at the pre-enhancement 12% match.
    fn flat_22_percent_assumptions() -> Assumptions {
        Assumptions {
            contributions: ContributionSchedule {
                government_rate_enhanced: 0.12,
                ..ContributionSchedule::default()
            },
            ..Assumptions::default_scheme()
        }
    }

    #[test]
    fn test_first_month_contribution_at_zero_return() {
        let params = zero_return_params();
        let assumptions = flat_22_percent_assumptions();

        let mut timeline = SalaryProjector::new(assumptions.clone(), &params)
            .project(&short_career_profile())
            .expect("projection succeeds");
        NpsAccumulator::new(&assumptions, &params).accumulate(&mut timeline);

        // 10% employee + 12% government on level-10 gross, no market growth
        let expected = 56_100.0 * 1.53 * 0.22;
        let first = timeline.first().expect("timeline not empty");
        assert_relative_eq!(first.nps_corpus, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_return_corpus_is_contribution_sum() {
        let params = zero_return_params();
        let assumptions = flat_22_percent_assumptions();

        let mut timeline = SalaryProjector::new(assumptions.clone(), &params)
            .project(&short_career_profile())
            .expect("projection succeeds");
        NpsAccumulator::new(&assumptions, &params).accumulate(&mut timeline);

        let contribution_sum: f64 = timeline
            .records
            .iter()
            .map(|r| r.gross_salary * 0.22)
            .sum();
        let last = timeline.last().expect("timeline not empty");
        assert_relative_eq!(last.nps_corpus, contribution_sum, epsilon = 1e-6);
    }

    #[test]
    fn test_corpus_non_decreasing_with_non_negative_rates() {
        let params = SchemeParameters::default();
        let assumptions = Assumptions::default_scheme();

        let mut timeline = SalaryProjector::new(assumptions.clone(), &params)
            .project(&short_career_profile())
            .expect("projection succeeds");
        NpsAccumulator::new(&assumptions, &params).accumulate(&mut timeline);

        let mut prev = 0.0;
        for record in &timeline.records {
            assert!(record.nps_corpus >= prev);
            prev = record.nps_corpus;
        }
    }

    #[test]
    fn test_empty_timeline_is_noop() {
        let params = SchemeParameters::default();
        let assumptions = Assumptions::default_scheme();
        let mut timeline = SalaryTimeline::new();
        NpsAccumulator::new(&assumptions, &params).accumulate(&mut timeline);
        assert!(timeline.is_empty());
    }
}
