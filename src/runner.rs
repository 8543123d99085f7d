//! Simulation runner tying the pipeline together
//!
//! Pre-loads base assumptions once, then produces a fresh outcome per
//! `simulate` call: timeline, corpora, valuation, comparison table, and
//! crossovers are all new value objects with no state shared across runs.

use chrono::Datelike;
use log::info;

use crate::assumptions::Assumptions;
use crate::benefits::{BenefitResolver, UpsValuation};
use crate::corpus::{NpsAccumulator, UpsCorpusTracker};
use crate::error::SimulationError;
use crate::params::SchemeParameters;
use crate::profile::EmployeeProfile;
use crate::sweep::{find_crossovers, ComparisonRow, Crossover, MortalitySweep};
use crate::timeline::{SalaryProjector, SalaryTimeline};

/// Everything one simulation run produces.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Monthly salary and corpus progression, joining through retirement
    pub timeline: SalaryTimeline,

    /// UPS valuation at the retirement date; `None` for an empty timeline
    pub valuation: Option<UpsValuation>,

    /// One row per swept death age
    pub comparison: Vec<ComparisonRow>,

    /// Dominance changes across the comparison table
    pub crossovers: Vec<Crossover>,
}

/// Pre-loaded runner for one or many simulation runs
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    base_assumptions: Assumptions,
}

impl SimulationRunner {
    /// Runner with the baseline pay matrix and contribution rates
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_scheme(),
        }
    }

    /// Runner with pre-built assumptions (e.g., a CSV pay-matrix override)
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Run the full pipeline for one profile under one parameter set.
    ///
    /// The projector works on a clone of the base assumptions (the pay
    /// matrix is revalued in place during the walk), so repeated calls are
    /// independent.
    pub fn simulate(
        &self,
        profile: &EmployeeProfile,
        params: &SchemeParameters,
    ) -> Result<SimulationOutcome, SimulationError> {
        let mut projector = SalaryProjector::new(self.base_assumptions.clone(), params);
        let mut timeline = projector.project(profile)?;

        NpsAccumulator::new(&self.base_assumptions, params).accumulate(&mut timeline);
        UpsCorpusTracker::new(&self.base_assumptions, params).accumulate(&mut timeline);

        let retirement = profile.retirement_date();
        let valuation =
            UpsValuation::compute(&timeline, params, retirement.year(), retirement.month());

        let (comparison, crossovers) = {
            let resolver = BenefitResolver::new(&timeline, valuation.as_ref(), profile, params);
            let sweep =
                MortalitySweep::new(resolver, profile, timeline.first().map(|r| r.year));
            let comparison = sweep.run();
            let crossovers = find_crossovers(&comparison);
            (comparison, crossovers)
        };

        info!(
            "simulated {} salary months, {} comparison rows, {} crossovers",
            timeline.len(),
            comparison.len(),
            crossovers.len()
        );

        Ok(SimulationOutcome {
            timeline,
            valuation,
            comparison,
            crossovers,
        })
    }
}

impl Default for SimulationRunner {
    fn default() -> Self {
        Self::new()
    }
}
