//! Load a simulation scenario from a JSON file

use super::EmployeeProfile;
use crate::params::SchemeParameters;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::Path;

/// A profile plus the parameters to run it under.
///
/// Parameters may be given partially; omitted fields fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub profile: EmployeeProfile,
    #[serde(default)]
    pub parameters: SchemeParameters,
}

/// Load a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioFile, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    load_scenario_from_reader(file)
}

/// Load a scenario from any reader (e.g., string buffer, network stream)
pub fn load_scenario_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<ScenarioFile, Box<dyn Error>> {
    let scenario: ScenarioFile = serde_json::from_reader(reader)?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenario_with_partial_parameters() {
        let json = r#"{
            "profile": {
                "birth_date": "1996-06-01",
                "joining_date": "2023-12-01",
                "seniority_date": "2022-01-01",
                "normal_retirement_age": 60,
                "retirement_age": 60,
                "spouse_survival_offset": 10
            },
            "parameters": {
                "inflation_rate": 0.04,
                "withdrawal_fraction": 0.25
            }
        }"#;

        let scenario = load_scenario_from_reader(json.as_bytes()).expect("scenario parses");
        assert_eq!(scenario.profile.retirement_age, 60);
        assert!((scenario.parameters.inflation_rate - 0.04).abs() < 1e-12);
        assert!((scenario.parameters.withdrawal_fraction - 0.25).abs() < 1e-12);
        // Omitted fields keep their defaults
        assert!((scenario.parameters.annuity_rate - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_load_scenario_without_parameters() {
        let json = r#"{
            "profile": {
                "birth_date": "1990-01-01",
                "joining_date": "2015-07-01",
                "seniority_date": "2015-07-01",
                "normal_retirement_age": 60,
                "retirement_age": 55
            }
        }"#;

        let scenario = load_scenario_from_reader(json.as_bytes()).expect("scenario parses");
        assert!(scenario.profile.is_vrs());
        assert_eq!(scenario.profile.spouse_survival_offset, 0);
    }
}
