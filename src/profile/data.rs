//! Employee profile data structures

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::timeline::{month_start, months_between};

/// The employee whose career and benefits are simulated.
///
/// All dates use a first-of-month convention; the day component is ignored
/// by the engine. The seniority date may differ from the joining date when
/// seniority was granted retroactively; tier placement follows seniority,
/// increments follow actual employment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Date of birth
    pub birth_date: NaiveDate,

    /// Date of joining the service
    pub joining_date: NaiveDate,

    /// Date seniority is counted from (may precede or follow joining)
    pub seniority_date: NaiveDate,

    /// Normal (superannuation) retirement age in years
    pub normal_retirement_age: u8,

    /// Actual retirement age in years; below normal means voluntary retirement
    pub retirement_age: u8,

    /// Years the spouse is expected to outlive the employee (negative allowed)
    #[serde(default)]
    pub spouse_survival_offset: i32,
}

impl EmployeeProfile {
    pub fn new(
        birth_date: NaiveDate,
        joining_date: NaiveDate,
        seniority_date: NaiveDate,
        normal_retirement_age: u8,
        retirement_age: u8,
        spouse_survival_offset: i32,
    ) -> Self {
        Self {
            birth_date,
            joining_date,
            seniority_date,
            normal_retirement_age,
            retirement_age,
            spouse_survival_offset,
        }
    }

    /// Retirement occurs in the birth month of the year the employee turns
    /// `retirement_age`.
    pub fn retirement_date(&self) -> NaiveDate {
        month_start(
            self.birth_date.year() + self.retirement_age as i32,
            self.birth_date.month(),
        )
    }

    /// Whether this profile retires before normal retirement age.
    pub fn is_vrs(&self) -> bool {
        self.retirement_age < self.normal_retirement_age
    }

    /// Calendar year in which the employee reaches normal retirement age.
    /// Equals the retirement year for non-VRS profiles.
    pub fn normal_retirement_year(&self) -> i32 {
        self.retirement_date().year()
            + (self.normal_retirement_age as i32 - self.retirement_age as i32)
    }

    /// Qualifying service in months at the actual retirement date.
    pub fn service_months_at_retirement(&self) -> i64 {
        months_between(self.joining_date, self.retirement_date())
    }

    /// Attained age, rounded to whole years, for a death occurring in the
    /// given calendar year.
    pub fn death_age(&self, death_year: i32) -> i32 {
        let fractional = (death_year - self.birth_date.year()) as f64
            + (self.birth_date.month() - 1) as f64 / 12.0;
        fractional.round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_retirement_date_in_birth_month() {
        let p = profile(60);
        assert_eq!(p.retirement_date(), month_start(2056, 6));
        assert!(!p.is_vrs());
        assert_eq!(p.normal_retirement_year(), 2056);
    }

    #[test]
    fn test_vrs_shifts_normal_retirement_year() {
        let p = profile(50);
        assert!(p.is_vrs());
        assert_eq!(p.retirement_date(), month_start(2046, 6));
        assert_eq!(p.normal_retirement_year(), 2056);
    }

    #[test]
    fn test_death_age_rounding() {
        let p = profile(60);
        // Birth June 1996: dying in 2071 is age 75 + 5/12, rounds to 75
        assert_eq!(p.death_age(2071), 75);
    }

    #[test]
    fn test_service_months_at_retirement() {
        let p = profile(60);
        // Dec 2023 to Jun 2056
        assert_eq!(p.service_months_at_retirement(), (2056 - 2023) * 12 - 6);
    }
}
