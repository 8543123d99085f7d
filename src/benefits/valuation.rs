//! Guaranteed-scheme valuation at a point in time

use serde::{Deserialize, Serialize};

use crate::params::SchemeParameters;
use crate::timeline::SalaryTimeline;

/// Service months required for the minimum assured payout.
pub const MINIMUM_QUALIFYING_MONTHS: i64 = 120;

/// Service months required for gratuity eligibility.
pub const GRATUITY_QUALIFYING_MONTHS: i64 = 60;

/// Service months at which the pension fraction reaches full credit.
pub const FULL_PENSION_SERVICE_MONTHS: f64 = 300.0;

/// UPS valuation derived from the salary timeline at a single date.
///
/// Immutable once computed. The same shape serves the retirement valuation
/// and the as-of-death valuation used by the pre-retirement family pension;
/// the withdrawal fields are simply unused in the latter case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsValuation {
    /// Average gross salary over the last twelve months
    pub avg_last_12_month_salary: f64,

    /// Qualifying service in months
    pub service_months: i64,

    /// Notional benchmark corpus at the valuation date
    pub benchmark_corpus: f64,

    /// Individual corpus at the valuation date
    pub individual_corpus: f64,

    /// min(individual / benchmark, 1); zero when the benchmark is zero
    pub corpus_ratio: f64,

    /// Half of average salary, scaled by corpus ratio and service fraction
    pub assured_payout: f64,

    /// Assured payout after the withdrawal reduction and minimum floor
    pub adjusted_pension: f64,

    /// Lumpsum withdrawal taken from the smaller of the two corpora
    pub lumpsum_withdrawal: f64,

    /// Individual corpus in excess of the benchmark, floored at zero
    pub excess_corpus: f64,

    /// Retirement/death gratuity; zero below the qualifying service
    pub gratuity: f64,

    /// Gratuity plus excess corpus plus lumpsum withdrawal
    pub lump_sum: f64,

    /// Whether minimum qualifying service was met
    pub has_minimum_service: bool,
}

impl UpsValuation {
    /// Value the guaranteed scheme as of a calendar month.
    ///
    /// Returns `None` when the timeline has no record at or before the
    /// valuation month; callers treat that as an all-zero benefit.
    pub fn compute(
        timeline: &SalaryTimeline,
        params: &SchemeParameters,
        year: i32,
        month: u32,
    ) -> Option<Self> {
        let snapshot = timeline.record_at_or_before(year, month)?;
        let avg_last_12_month_salary = timeline.average_gross_last_12(year, month);
        let service_months = timeline.service_months_until(year, month)?;
        let has_minimum_service = service_months >= MINIMUM_QUALIFYING_MONTHS;

        let benchmark_corpus = snapshot.benchmark_corpus;
        let individual_corpus = snapshot.individual_corpus;

        let pension_fraction = (service_months as f64 / FULL_PENSION_SERVICE_MONTHS).min(1.0);
        let corpus_ratio = if benchmark_corpus > 0.0 {
            (individual_corpus / benchmark_corpus).min(1.0)
        } else {
            0.0
        };

        let assured_payout = (avg_last_12_month_salary / 2.0) * corpus_ratio * pension_fraction;

        let withdrawal = params.clamped_withdrawal();
        let excess_corpus = (individual_corpus - benchmark_corpus).max(0.0);
        let applicable_corpus = benchmark_corpus.min(individual_corpus);
        let lumpsum_withdrawal = applicable_corpus * withdrawal;

        // Proportionate reduction, then the floor for qualifying service
        let mut adjusted_pension = assured_payout * (1.0 - withdrawal);
        if has_minimum_service && adjusted_pension < params.min_assured_payout {
            adjusted_pension = params.min_assured_payout;
        }

        let gratuity = if service_months >= GRATUITY_QUALIFYING_MONTHS {
            0.1 * avg_last_12_month_salary * (service_months as f64 / 6.0)
        } else {
            0.0
        };

        let lump_sum = gratuity + excess_corpus + lumpsum_withdrawal;

        Some(Self {
            avg_last_12_month_salary,
            service_months,
            benchmark_corpus,
            individual_corpus,
            corpus_ratio,
            assured_payout,
            adjusted_pension,
            lumpsum_withdrawal,
            excess_corpus,
            gratuity,
            lump_sum,
            has_minimum_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::corpus::{NpsAccumulator, UpsCorpusTracker};
    use crate::profile::EmployeeProfile;
    use crate::timeline::{month_start, SalaryProjector, SalaryTimeline};
    use approx::assert_relative_eq;

    fn build_timeline(retirement_age: u8, params: &SchemeParameters) -> SalaryTimeline {
        let profile = EmployeeProfile::new(
            month_start(1990, 6),
            month_start(2016, 1),
            month_start(2016, 1),
            60,
            retirement_age,
            10,
        );
        let assumptions = Assumptions::default_scheme();
        let mut timeline = SalaryProjector::new(assumptions.clone(), params)
            .project(&profile)
            .expect("projection succeeds");
        NpsAccumulator::new(&assumptions, params).accumulate(&mut timeline);
        UpsCorpusTracker::new(&assumptions, params).accumulate(&mut timeline);
        timeline
    }

    #[test]
    fn test_zero_withdrawal_leaves_pension_unreduced() {
        let params = SchemeParameters::default();
        let timeline = build_timeline(60, &params);

        let v = UpsValuation::compute(&timeline, &params, 2050, 6).expect("valuation exists");
        assert_relative_eq!(v.lumpsum_withdrawal, 0.0);
        assert_relative_eq!(v.adjusted_pension, v.assured_payout);
    }

    #[test]
    fn test_withdrawal_reduces_proportionally() {
        let params = SchemeParameters {
            withdrawal_fraction: 0.4,
            ..SchemeParameters::default()
        };
        let timeline = build_timeline(60, &params);

        let v = UpsValuation::compute(&timeline, &params, 2050, 6).expect("valuation exists");
        assert_relative_eq!(v.adjusted_pension, v.assured_payout * 0.6, max_relative = 1e-9);
        let applicable = v.benchmark_corpus.min(v.individual_corpus);
        assert_relative_eq!(v.lumpsum_withdrawal, applicable * 0.4, max_relative = 1e-9);
    }

    #[test]
    fn test_out_of_range_withdrawal_clamped() {
        let params = SchemeParameters {
            withdrawal_fraction: 0.95,
            ..SchemeParameters::default()
        };
        let timeline = build_timeline(60, &params);

        let v = UpsValuation::compute(&timeline, &params, 2050, 6).expect("valuation exists");
        assert_relative_eq!(v.adjusted_pension, v.assured_payout * 0.4, max_relative = 1e-9);
    }

    #[test]
    fn test_corpus_ratio_bounded() {
        let params = SchemeParameters::default();
        let timeline = build_timeline(60, &params);

        for (year, month) in [(2017, 1), (2026, 4), (2040, 12), (2050, 6)] {
            let v = UpsValuation::compute(&timeline, &params, year, month)
                .expect("valuation exists");
            assert!(v.corpus_ratio >= 0.0 && v.corpus_ratio <= 1.0);
        }
    }

    #[test]
    fn test_zero_benchmark_resolves_ratio_to_zero() {
        let params = SchemeParameters::default();
        let mut timeline = build_timeline(60, &params);
        for record in timeline.records.iter_mut() {
            record.benchmark_corpus = 0.0;
        }

        let v = UpsValuation::compute(&timeline, &params, 2050, 6).expect("valuation exists");
        assert_eq!(v.corpus_ratio, 0.0);
        assert_eq!(v.assured_payout, 0.0);
    }

    #[test]
    fn test_minimum_payout_floor() {
        let params = SchemeParameters::default();
        let mut timeline = build_timeline(60, &params);
        // Starve the individual corpus so the raw pension collapses
        for record in timeline.records.iter_mut() {
            record.individual_corpus = record.benchmark_corpus * 1e-6;
        }

        let v = UpsValuation::compute(&timeline, &params, 2050, 6).expect("valuation exists");
        assert!(v.has_minimum_service);
        assert_relative_eq!(v.adjusted_pension, params.min_assured_payout);
    }

    #[test]
    fn test_no_floor_below_minimum_service() {
        let params = SchemeParameters::default();
        let mut timeline = build_timeline(60, &params);
        for record in timeline.records.iter_mut() {
            record.individual_corpus = record.benchmark_corpus * 1e-6;
        }

        // Five years in: gratuity qualifies, the pension floor does not
        let v = UpsValuation::compute(&timeline, &params, 2021, 1).expect("valuation exists");
        assert!(!v.has_minimum_service);
        assert!(v.adjusted_pension < params.min_assured_payout);
    }

    #[test]
    fn test_gratuity_gating() {
        let params = SchemeParameters::default();
        let timeline = build_timeline(60, &params);

        // Under five years of service: no gratuity
        let early = UpsValuation::compute(&timeline, &params, 2019, 1).expect("valuation exists");
        assert_eq!(early.gratuity, 0.0);

        // At five years: one tenth of average salary per six service months
        let at_five = UpsValuation::compute(&timeline, &params, 2021, 1).expect("valuation exists");
        let expected = 0.1 * at_five.avg_last_12_month_salary * (60.0 / 6.0);
        assert_relative_eq!(at_five.gratuity, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_pension_fraction_caps_at_full_service() {
        let params = SchemeParameters::default();
        let timeline = build_timeline(60, &params);

        // 2050 is well past 25 years of service; the fraction must cap at 1
        let v = UpsValuation::compute(&timeline, &params, 2050, 6).expect("valuation exists");
        let uncapped = (v.avg_last_12_month_salary / 2.0) * v.corpus_ratio;
        assert_relative_eq!(v.assured_payout, uncapped, max_relative = 1e-9);
    }

    #[test]
    fn test_before_first_record_is_none() {
        let params = SchemeParameters::default();
        let timeline = build_timeline(60, &params);
        assert!(UpsValuation::compute(&timeline, &params, 2015, 12).is_none());
    }
}
