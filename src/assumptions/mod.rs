//! Static assumptions: pay scales, glide paths, and contribution rates

mod contributions;
mod glidepath;
mod payscale;
pub mod loader;

pub use contributions::ContributionSchedule;
pub use glidepath::{LifecycleFund, CORPORATE_BOND_SHARE, GSEC_SHARE};
pub use payscale::{PayMatrix, PayTier, ANNUAL_INCREMENT_RATE};

use std::error::Error;
use std::path::Path;

/// Container for the tabular assumptions a simulation runs against
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub pay_matrix: PayMatrix,
    pub contributions: ContributionSchedule,
}

impl Assumptions {
    /// Assumptions with the baseline pay matrix and current contribution rates
    pub fn default_scheme() -> Self {
        Self {
            pay_matrix: PayMatrix::seventh_cpc(),
            contributions: ContributionSchedule::default(),
        }
    }

    /// Assumptions with a pay matrix loaded from a CSV override
    pub fn with_pay_matrix_csv(path: &Path) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            pay_matrix: loader::load_pay_matrix(path)?,
            contributions: ContributionSchedule::default(),
        })
    }
}
