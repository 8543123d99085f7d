//! Benefit valuation and scenario resolution

mod annuity;
mod resolver;
mod scenario;
mod valuation;

pub use annuity::{pension_for_year, pension_stream_value, PensionStreamValue};
pub use resolver::{BenefitResolver, SchemeBenefit, FAMILY_PENSION_FRACTION};
pub use scenario::{RetirementScenario, SWEEP_DEATH_MONTH};
pub use valuation::{
    UpsValuation, FULL_PENSION_SERVICE_MONTHS, GRATUITY_QUALIFYING_MONTHS,
    MINIMUM_QUALIFYING_MONTHS,
};
