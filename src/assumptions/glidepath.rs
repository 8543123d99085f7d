//! Lifecycle fund glide paths for the defined-contribution scheme
//!
//! Each fund holds its equity ceiling until 35 years, then decays linearly
//! to a floor. The non-equity remainder always splits 60/40 between
//! corporate bonds and government securities.

use serde::{Deserialize, Serialize};

/// Share of the non-equity allocation held in corporate bonds.
pub const CORPORATE_BOND_SHARE: f64 = 0.6;

/// Share of the non-equity allocation held in government securities.
pub const GSEC_SHARE: f64 = 0.4;

/// Age (in years since joining) at which equity de-risking begins.
const DECAY_START_AGE: f64 = 35.0;

/// Predefined lifecycle fund variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleFund {
    /// LC75: 75% equity ceiling, 3%/year decay, 15% floor
    Aggressive,
    /// LC50: 50% equity ceiling, 2%/year decay, 10% floor
    Moderate,
    /// LC25: 25% equity ceiling, 1%/year decay, 5% floor
    Conservative,
}

impl LifecycleFund {
    /// Conventional fund code
    pub fn code(&self) -> &'static str {
        match self {
            LifecycleFund::Aggressive => "LC75",
            LifecycleFund::Moderate => "LC50",
            LifecycleFund::Conservative => "LC25",
        }
    }

    fn curve(&self) -> (f64, f64, f64) {
        // (ceiling, annual decay, floor)
        match self {
            LifecycleFund::Aggressive => (0.75, 0.03, 0.15),
            LifecycleFund::Moderate => (0.50, 0.02, 0.10),
            LifecycleFund::Conservative => (0.25, 0.01, 0.05),
        }
    }

    /// Equity share at a fractional age in years.
    pub fn equity_allocation(&self, age_years: f64) -> f64 {
        let (ceiling, decay, floor) = self.curve();
        if age_years <= DECAY_START_AGE {
            ceiling
        } else {
            (ceiling - decay * (age_years - DECAY_START_AGE)).max(floor)
        }
    }

    /// Allocation-weighted monthly return for the given annual asset returns.
    pub fn blended_monthly_return(
        &self,
        age_years: f64,
        equity_return: f64,
        corporate_bond_return: f64,
        gsec_return: f64,
    ) -> f64 {
        let equity = self.equity_allocation(age_years);
        let remaining = 1.0 - equity;
        equity * (equity_return / 12.0)
            + remaining * CORPORATE_BOND_SHARE * (corporate_bond_return / 12.0)
            + remaining * GSEC_SHARE * (gsec_return / 12.0)
    }
}

impl Default for LifecycleFund {
    fn default() -> Self {
        LifecycleFund::Moderate
    }
}
