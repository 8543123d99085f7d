//! Employee profile and scenario loading

mod data;
pub mod loader;

pub use data::EmployeeProfile;
pub use loader::{load_scenario, load_scenario_from_reader, ScenarioFile};
