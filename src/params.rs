//! Per-run scheme parameters

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::assumptions::LifecycleFund;
use crate::timeline::month_start;

/// Largest allowed lumpsum withdrawal fraction.
pub const MAX_WITHDRAWAL_FRACTION: f64 = 0.6;

/// Economic and policy parameters for a single simulation run.
///
/// All rates are annual fractions. The struct is immutable once a run
/// starts; every derived quantity is recomputed from it per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeParameters {
    /// Annual inflation rate used for present-value discounting
    pub inflation_rate: f64,

    /// Guaranteed annual growth rate of the benchmark/individual corpora
    pub guaranteed_fund_rate: f64,

    /// Annual equity return assumption
    pub equity_return: f64,

    /// Annual corporate bond return assumption
    pub corporate_bond_return: f64,

    /// Annual government securities return assumption
    pub gsec_return: f64,

    /// Chosen lifecycle fund for the defined-contribution allocation
    pub lifecycle_fund: LifecycleFund,

    /// Desired lumpsum withdrawal fraction; values outside [0, 0.6] are
    /// clamped at use, never rejected
    pub withdrawal_fraction: f64,

    /// Annual annuity rate of the return-of-purchase-price plan
    pub annuity_rate: f64,

    /// Years between pay commissions
    pub pay_commission_interval: u32,

    /// Calendar year of the reference pay commission
    pub pay_commission_base_year: i32,

    /// Salary and pension multiplier applied at each pay commission
    pub fitment_factor: f64,

    /// Month (1-12) in which pay-commission revaluation takes effect
    pub revaluation_month: u32,

    /// Month (1-12) in which the annual increment is granted
    pub increment_month: u32,

    /// Date the guaranteed scheme begins tracking its corpora
    pub switch_date: NaiveDate,

    /// Annual dearness-relief escalation applied to disbursed pensions
    pub dearness_relief_rate: f64,

    /// Minimum monthly assured payout once minimum qualifying service is met
    pub min_assured_payout: f64,
}

impl SchemeParameters {
    /// Fitment factor per Ackroyd's formula: inflation compounded over the
    /// commission interval plus a cost-of-living adjustment.
    pub fn ackroyd_fitment(inflation_rate: f64, interval_years: u32, cola: f64) -> f64 {
        (1.0 + inflation_rate).powi(interval_years as i32) + cola
    }

    /// Withdrawal fraction clamped to its legal range.
    pub fn clamped_withdrawal(&self) -> f64 {
        self.withdrawal_fraction.clamp(0.0, MAX_WITHDRAWAL_FRACTION)
    }

    /// Whether `year` is a pay-commission year.
    pub fn is_pay_commission_year(&self, year: i32) -> bool {
        self.pay_commission_interval > 0
            && year >= self.pay_commission_base_year
            && (year - self.pay_commission_base_year) % self.pay_commission_interval as i32 == 0
    }

    /// Monthly rate of the guaranteed corpus growth.
    pub fn guaranteed_monthly_rate(&self) -> f64 {
        self.guaranteed_fund_rate / 12.0
    }
}

impl Default for SchemeParameters {
    fn default() -> Self {
        let inflation_rate = 0.05;
        let pay_commission_interval = 10;
        Self {
            inflation_rate,
            guaranteed_fund_rate: 0.08,
            equity_return: 0.12,
            corporate_bond_return: 0.08,
            gsec_return: 0.06,
            lifecycle_fund: LifecycleFund::default(),
            withdrawal_fraction: 0.0,
            annuity_rate: 0.06,
            pay_commission_interval,
            pay_commission_base_year: 2016,
            fitment_factor: Self::ackroyd_fitment(inflation_rate, pay_commission_interval, 0.2),
            revaluation_month: 4,
            increment_month: 7,
            switch_date: month_start(2025, 4),
            dearness_relief_rate: 0.02,
            min_assured_payout: 10_000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ackroyd_fitment() {
        // 5% over 10 years plus 0.2 COLA
        let fitment = SchemeParameters::ackroyd_fitment(0.05, 10, 0.2);
        assert_relative_eq!(fitment, 1.05_f64.powi(10) + 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_withdrawal_clamped_silently() {
        let mut params = SchemeParameters::default();

        params.withdrawal_fraction = 0.9;
        assert_relative_eq!(params.clamped_withdrawal(), 0.6);

        params.withdrawal_fraction = -0.1;
        assert_relative_eq!(params.clamped_withdrawal(), 0.0);

        params.withdrawal_fraction = 0.25;
        assert_relative_eq!(params.clamped_withdrawal(), 0.25);
    }

    #[test]
    fn test_pay_commission_years() {
        let params = SchemeParameters::default();
        assert!(params.is_pay_commission_year(2016));
        assert!(params.is_pay_commission_year(2026));
        assert!(params.is_pay_commission_year(2056));
        assert!(!params.is_pay_commission_year(2025));
        assert!(!params.is_pay_commission_year(2006));
    }

    #[test]
    fn test_zero_interval_means_no_commissions() {
        let params = SchemeParameters {
            pay_commission_interval: 0,
            ..SchemeParameters::default()
        };
        assert!(!params.is_pay_commission_year(2016));
    }
}
