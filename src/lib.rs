//! Pension System - projection engine comparing NPS and UPS retirement benefits
//!
//! This library provides:
//! - Monthly salary progression over a pay-scale matrix with revaluation
//! - Defined-contribution (NPS) corpus accumulation under lifecycle funds
//! - Guaranteed-scheme (UPS) benchmark and individual corpus tracking
//! - Scenario-based benefit resolution (pre-retirement death, VRS, post-retirement)
//! - Mortality sweeps with crossover detection between the two schemes

pub mod assumptions;
pub mod benefits;
pub mod corpus;
pub mod error;
pub mod params;
pub mod profile;
pub mod runner;
pub mod sweep;
pub mod timeline;

// Re-export commonly used types
pub use assumptions::{Assumptions, LifecycleFund, PayMatrix, PayTier};
pub use benefits::{BenefitResolver, RetirementScenario, SchemeBenefit, UpsValuation};
pub use error::SimulationError;
pub use params::SchemeParameters;
pub use profile::{EmployeeProfile, ScenarioFile};
pub use runner::{SimulationOutcome, SimulationRunner};
pub use sweep::{ComparisonRow, Crossover, Scheme};
pub use timeline::{SalaryRecord, SalaryTimeline};
