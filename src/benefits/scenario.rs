//! Retirement scenario classification

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::profile::EmployeeProfile;

/// Death month assumed within a swept death year.
///
/// The sweep enumerates whole calendar years; a single December convention
/// keeps both schemes' classifications and snapshots consistent.
pub const SWEEP_DEATH_MONTH: u32 = 12;

/// Mutually exclusive benefit scenarios, resolved once per death-year query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetirementScenario {
    /// Death strictly before the retirement date
    PreRetirementDeath { death_year: i32 },

    /// Voluntary retirement: pension disbursement waits for normal
    /// retirement age
    VoluntaryRetirement { pension_start_year: i32 },

    /// Death at or after a normal-age retirement
    PostRetirementDeath { retirement_year: i32 },
}

impl RetirementScenario {
    /// Classify a hypothetical death year against the profile.
    pub fn classify(profile: &EmployeeProfile, death_year: i32) -> Self {
        let retirement = profile.retirement_date();
        let pre_retirement = death_year < retirement.year()
            || (death_year == retirement.year() && SWEEP_DEATH_MONTH < retirement.month());

        if pre_retirement {
            RetirementScenario::PreRetirementDeath { death_year }
        } else if profile.is_vrs() {
            RetirementScenario::VoluntaryRetirement {
                pension_start_year: profile.normal_retirement_year(),
            }
        } else {
            RetirementScenario::PostRetirementDeath {
                retirement_year: retirement.year(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::month_start;

    fn profile(retirement_age: u8) -> EmployeeProfile {
        EmployeeProfile::new(
            month_start(1996, 6),
            month_start(2023, 12),
            month_start(2022, 1),
            60,
            retirement_age,
            10,
        )
    }

    #[test]
    fn test_pre_retirement_classification() {
        let p = profile(60); // retires June 2056
        assert_eq!(
            RetirementScenario::classify(&p, 2040),
            RetirementScenario::PreRetirementDeath { death_year: 2040 }
        );
    }

    #[test]
    fn test_retirement_year_death_is_post_retirement() {
        // December of the retirement year is at or after a June retirement
        let p = profile(60);
        assert_eq!(
            RetirementScenario::classify(&p, 2056),
            RetirementScenario::PostRetirementDeath { retirement_year: 2056 }
        );
    }

    #[test]
    fn test_vrs_classification_carries_pension_start() {
        let p = profile(50); // retires 2046, pension starts 2056
        assert_eq!(
            RetirementScenario::classify(&p, 2060),
            RetirementScenario::VoluntaryRetirement { pension_start_year: 2056 }
        );
        // Death before the VRS date still classifies pre-retirement
        assert_eq!(
            RetirementScenario::classify(&p, 2040),
            RetirementScenario::PreRetirementDeath { death_year: 2040 }
        );
    }
}
