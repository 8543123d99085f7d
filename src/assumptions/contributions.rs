//! Contribution rate schedule for both schemes

use serde::{Deserialize, Serialize};

/// Contribution rates as fractions of gross salary.
///
/// The government's defined-contribution match stepped up once on a known
/// policy date; the year is configuration because the engine has no
/// authority over the policy fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContributionSchedule {
    /// Employee contribution rate (both schemes)
    pub employee_rate: f64,

    /// Government match before the step-up year
    pub government_rate_initial: f64,

    /// Government match from the step-up year onward
    pub government_rate_enhanced: f64,

    /// First calendar year the enhanced government rate applies
    pub enhancement_year: i32,

    /// Combined contribution rate credited under the guaranteed scheme
    pub ups_rate: f64,
}

impl ContributionSchedule {
    /// Combined NPS contribution rate for a calendar year.
    pub fn nps_rate(&self, year: i32) -> f64 {
        let government = if year >= self.enhancement_year {
            self.government_rate_enhanced
        } else {
            self.government_rate_initial
        };
        self.employee_rate + government
    }
}

impl Default for ContributionSchedule {
    fn default() -> Self {
        Self {
            employee_rate: 0.10,
            government_rate_initial: 0.12,
            government_rate_enhanced: 0.14,
            enhancement_year: 2019,
            ups_rate: 0.20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_up_year() {
        let schedule = ContributionSchedule::default();
        assert!((schedule.nps_rate(2018) - 0.22).abs() < 1e-12);
        assert!((schedule.nps_rate(2019) - 0.24).abs() < 1e-12);
        assert!((schedule.nps_rate(2030) - 0.24).abs() < 1e-12);
    }
}
