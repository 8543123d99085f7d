//! Benefit resolution for a hypothetical death year
//!
//! One parameterized resolver covers both schemes across the three
//! scenarios. All queries run against the immutable timeline and the
//! at-retirement valuation; an empty timeline or a death before the first
//! salary month resolves to an all-zero benefit rather than an error.

use chrono::Datelike;
use log::trace;
use serde::{Deserialize, Serialize};

use super::annuity::{pension_for_year, pension_stream_value, PensionStreamValue};
use super::scenario::{RetirementScenario, SWEEP_DEATH_MONTH};
use super::valuation::{UpsValuation, GRATUITY_QUALIFYING_MONTHS, MINIMUM_QUALIFYING_MONTHS};
use crate::params::SchemeParameters;
use crate::profile::EmployeeProfile;
use crate::timeline::SalaryTimeline;

/// Family pension as a fraction of the employee's pension at death.
pub const FAMILY_PENSION_FRACTION: f64 = 0.6;

/// One scheme's benefit for one hypothetical death year.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SchemeBenefit {
    /// Monthly pension level at death (or at grant, for a VRS death before
    /// disbursement begins)
    pub monthly_pension: f64,

    /// One-time payment: corpus, gratuity, excess, and/or withdrawal
    pub lump_sum: f64,

    /// Inflation-adjusted total value delivered through death
    pub value_pv: f64,

    /// Nominal total value delivered through death
    pub value_nominal: f64,
}

/// Resolves both schemes' benefits per death year.
pub struct BenefitResolver<'a> {
    timeline: &'a SalaryTimeline,
    valuation: Option<&'a UpsValuation>,
    profile: &'a EmployeeProfile,
    params: &'a SchemeParameters,
}

impl<'a> BenefitResolver<'a> {
    /// `valuation` is the at-retirement UPS valuation, `None` when the
    /// timeline is empty.
    pub fn new(
        timeline: &'a SalaryTimeline,
        valuation: Option<&'a UpsValuation>,
        profile: &'a EmployeeProfile,
        params: &'a SchemeParameters,
    ) -> Self {
        Self { timeline, valuation, profile, params }
    }

    /// Defined-contribution benefit for a death in the given year.
    pub fn nps_benefit(&self, death_year: i32) -> SchemeBenefit {
        match RetirementScenario::classify(self.profile, death_year) {
            RetirementScenario::PreRetirementDeath { death_year } => {
                // Full accumulated corpus paid out, no pension
                let Some(record) =
                    self.timeline.record_at_or_before(death_year, SWEEP_DEATH_MONTH)
                else {
                    return SchemeBenefit::default();
                };
                let corpus = record.nps_corpus;
                SchemeBenefit {
                    monthly_pension: 0.0,
                    lump_sum: corpus,
                    value_pv: corpus,
                    value_nominal: corpus,
                }
            }
            RetirementScenario::VoluntaryRetirement { .. }
            | RetirementScenario::PostRetirementDeath { .. } => {
                // Annuitized at the actual retirement date and frozen there;
                // the death year does not move the purchase
                let retirement = self.profile.retirement_date();
                let Some(record) = self
                    .timeline
                    .record_at_or_before(retirement.year(), retirement.month())
                else {
                    return SchemeBenefit::default();
                };
                let corpus = record.nps_corpus;
                let withdrawal = self.params.clamped_withdrawal();
                let annuity_corpus = corpus * (1.0 - withdrawal);
                let lump_sum = corpus * withdrawal;
                SchemeBenefit {
                    monthly_pension: annuity_corpus * self.params.annuity_rate / 12.0,
                    lump_sum,
                    value_pv: corpus,
                    value_nominal: lump_sum + annuity_corpus,
                }
            }
        }
    }

    /// Guaranteed-scheme benefit for a death in the given year.
    pub fn ups_benefit(&self, death_year: i32) -> SchemeBenefit {
        let scenario = RetirementScenario::classify(self.profile, death_year);
        trace!("death year {}: {:?}", death_year, scenario);
        match scenario {
            RetirementScenario::PreRetirementDeath { death_year } => {
                self.pre_retirement_ups(death_year)
            }
            RetirementScenario::VoluntaryRetirement { pension_start_year } => {
                self.disbursed_ups(death_year, pension_start_year)
            }
            RetirementScenario::PostRetirementDeath { retirement_year } => {
                self.disbursed_ups(death_year, retirement_year)
            }
        }
    }

    /// Family pension from a death in service, plus death gratuity and any
    /// corpus excess.
    fn pre_retirement_ups(&self, death_year: i32) -> SchemeBenefit {
        let Some(at_death) =
            UpsValuation::compute(self.timeline, self.params, death_year, SWEEP_DEATH_MONTH)
        else {
            return SchemeBenefit::default();
        };

        // 60% of the pension the employee would have earned retiring on the
        // death date, floored once minimum qualifying service is met
        let mut family_pension = at_death.assured_payout * FAMILY_PENSION_FRACTION;
        let family_floor = self.params.min_assured_payout * FAMILY_PENSION_FRACTION;
        if at_death.service_months >= MINIMUM_QUALIFYING_MONTHS && family_pension < family_floor {
            family_pension = family_floor;
        }

        let mut value = pension_stream_value(
            death_year,
            SWEEP_DEATH_MONTH,
            family_pension,
            self.profile.spouse_survival_offset,
            self.params.inflation_rate,
            self.params.dearness_relief_rate,
        );

        // Gratuity and excess corpus pay only past the gratuity threshold
        let lump_sum = if at_death.service_months >= GRATUITY_QUALIFYING_MONTHS {
            at_death.gratuity + at_death.excess_corpus
        } else {
            0.0
        };
        value.add_lump_sum(lump_sum);

        SchemeBenefit {
            monthly_pension: family_pension,
            lump_sum,
            value_pv: value.present_value,
            value_nominal: value.nominal_value,
        }
    }

    /// Escalated pension stream from its start year through death, plus
    /// spousal continuation and the retirement lump sum.
    ///
    /// `pension_base_year` is the retirement year, or the normal-retirement
    /// year for VRS. Years before it disburse nothing, and escalation
    /// anniversaries count from it.
    fn disbursed_ups(&self, death_year: i32, pension_base_year: i32) -> SchemeBenefit {
        let Some(valuation) = self.valuation else {
            return SchemeBenefit::default();
        };
        let retirement = self.profile.retirement_date();
        let initial_pension = valuation.adjusted_pension;

        let mut value = PensionStreamValue::default();
        let monthly_discount = 1.0 + self.params.inflation_rate / 12.0;
        for year in pension_base_year..=death_year {
            let pension = self.escalated_pension(initial_pension, pension_base_year, year);
            let annual = pension * 12.0;
            value.nominal_value += annual;

            let months_since_retirement = if year == retirement.year() {
                12 - retirement.month() as i32
            } else {
                (year - retirement.year()) * 12
            };
            value.present_value += annual / monthly_discount.powi(months_since_retirement);
        }

        // Spousal continuation at 60% of the pension level at death
        let spouse_until = retirement.year() + self.profile.spouse_survival_offset;
        if death_year < spouse_until {
            let at_death = self.escalated_pension(initial_pension, pension_base_year, death_year);
            value.add(pension_stream_value(
                death_year,
                SWEEP_DEATH_MONTH,
                at_death * FAMILY_PENSION_FRACTION,
                spouse_until - death_year,
                self.params.inflation_rate,
                self.params.dearness_relief_rate,
            ));
        }

        value.add_lump_sum(valuation.lump_sum);

        SchemeBenefit {
            monthly_pension: self.escalated_pension(
                initial_pension,
                pension_base_year,
                death_year.max(pension_base_year),
            ),
            lump_sum: valuation.lump_sum,
            value_pv: value.present_value,
            value_nominal: value.nominal_value,
        }
    }

    fn escalated_pension(&self, initial: f64, base_year: i32, target_year: i32) -> f64 {
        pension_for_year(
            initial,
            base_year,
            target_year,
            self.params.pay_commission_interval,
            self.params.fitment_factor,
            self.params.dearness_relief_rate,
        )
    }
}
