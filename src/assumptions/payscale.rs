//! Pay scale matrix with tenure-based tiers and pay-commission revaluation
//!
//! The matrix holds nine ordered tiers (levels 10 through 18), each with a
//! basic pay and a fixed tenure. Basic pay is revalued in place at each
//! pay-commission event; tier tenures never change.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Annual increment rate, also the compounding rate of the revaluation floor.
pub const ANNUAL_INCREMENT_RATE: f64 = 0.03;

/// A single pay tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayTier {
    /// Pay level identifier
    pub level: u8,

    /// Monthly basic pay at entry to this tier
    pub basic_pay: f64,

    /// Months an employee spends in this tier before moving up
    pub tenure_months: u32,
}

/// Ordered pay tiers with revaluation and service-based lookup
#[derive(Debug, Clone)]
pub struct PayMatrix {
    tiers: Vec<PayTier>,
}

impl PayMatrix {
    /// Build a matrix from tiers, ordered by level.
    pub fn from_tiers(mut tiers: Vec<PayTier>) -> Result<Self, SimulationError> {
        if tiers.is_empty() {
            return Err(SimulationError::EmptyPayMatrix);
        }
        tiers.sort_by_key(|t| t.level);
        Ok(Self { tiers })
    }

    /// Baseline matrix: levels 10-18 with their entry pay and tenures.
    pub fn seventh_cpc() -> Self {
        Self {
            tiers: vec![
                PayTier { level: 10, basic_pay: 56_100.0, tenure_months: 48 }, // Junior Time Scale
                PayTier { level: 11, basic_pay: 67_700.0, tenure_months: 60 }, // Senior Time Scale
                PayTier { level: 12, basic_pay: 78_800.0, tenure_months: 48 }, // Junior Administrative Grade
                PayTier { level: 13, basic_pay: 123_100.0, tenure_months: 12 }, // Selection Grade
                PayTier { level: 14, basic_pay: 144_200.0, tenure_months: 48 }, // Super Time Scale
                PayTier { level: 15, basic_pay: 182_200.0, tenure_months: 84 }, // Senior Administrative Grade
                PayTier { level: 16, basic_pay: 205_400.0, tenure_months: 60 }, // HAG Scale
                PayTier { level: 17, basic_pay: 225_000.0, tenure_months: 72 }, // Apex Scale
                PayTier { level: 18, basic_pay: 250_000.0, tenure_months: 24 }, // Cabinet Secretary
            ],
        }
    }

    /// Revalue every tier for a pay commission.
    ///
    /// New basic pay is the greater of the flat fitment multiple and the
    /// immediately junior tier's revalued pay compounded over this tier's
    /// tenure plus two years. The floor prevents a senior tier from paying
    /// less than a junior tier after revaluation. The junior tier has
    /// already been revalued within the same pass.
    pub fn revalue(&mut self, fitment_factor: f64) {
        for i in 0..self.tiers.len() {
            let junior_pay = if i > 0 {
                self.tiers[i - 1].basic_pay
            } else {
                self.tiers[i].basic_pay
            };
            let tenure_years = self.tiers[i].tenure_months as f64 / 12.0;
            let floor = junior_pay * (1.0 + ANNUAL_INCREMENT_RATE).powf(tenure_years + 2.0);
            self.tiers[i].basic_pay = (self.tiers[i].basic_pay * fitment_factor).max(floor);
        }
    }

    /// Tier occupied after the given months of service, plus months already
    /// spent in that tier.
    ///
    /// Walks tiers in order accumulating tenure. Once the final tier's
    /// window is exhausted the employee stays pinned there; months in tier
    /// keep counting past its nominal tenure. Negative service (seniority
    /// dated after the queried month) resolves to the first tier.
    pub fn tier_for_service(&self, service_months: i64) -> (&PayTier, i64) {
        let mut cumulative: i64 = 0;
        for tier in &self.tiers {
            let window = tier.tenure_months as i64;
            cumulative += window;
            if service_months < cumulative {
                return (tier, service_months - (cumulative - window));
            }
        }
        let last = self.tiers.last().expect("matrix is never empty");
        (last, service_months - (cumulative - last.tenure_months as i64))
    }

    /// Basic pay for an exact level.
    ///
    /// The level always comes from a tier this matrix produced, so a miss is
    /// a programming-invariant violation, reported as a fatal error.
    pub fn basic_pay_for_level(&self, level: u8) -> Result<f64, SimulationError> {
        self.tiers
            .iter()
            .find(|t| t.level == level)
            .map(|t| t.basic_pay)
            .ok_or(SimulationError::UnknownPayLevel(level))
    }

    /// All tiers in level order.
    pub fn tiers(&self) -> &[PayTier] {
        &self.tiers
    }
}
