//! Mortality sweep and crossover detection
//!
//! Each death-year evaluation is independent given the completed timeline,
//! so the sweep fans out across worker threads; the timeline and valuation
//! are shared read-only. The crossover scan stays sequential.

use chrono::Datelike;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::benefits::BenefitResolver;
use crate::profile::EmployeeProfile;

/// Years past joining before the sweep starts.
const SWEEP_LEAD_YEARS: i32 = 10;

/// Age past birth at which the sweep stops.
const SWEEP_TERMINAL_AGE: i32 = 100;

/// One swept death age, both schemes side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub death_age: i32,
    pub ups_monthly_pension: f64,
    pub nps_monthly_pension: f64,
    pub ups_lump_sum: f64,
    pub nps_lump_sum: f64,
    pub ups_value_pv: f64,
    pub nps_value_pv: f64,
    pub ups_value_nominal: f64,
    pub nps_value_nominal: f64,
}

/// Which scheme delivers the larger present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Ups,
    Nps,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Ups => "UPS",
            Scheme::Nps => "NPS",
        }
    }
}

/// A death age at which the dominant scheme changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crossover {
    pub death_age: i32,
    pub winner: Scheme,
    pub ups_value: f64,
    pub nps_value: f64,
}

/// Sweeps hypothetical death years and assembles the comparison table.
pub struct MortalitySweep<'a> {
    resolver: BenefitResolver<'a>,
    profile: &'a EmployeeProfile,
    join_year: Option<i32>,
}

impl<'a> MortalitySweep<'a> {
    pub fn new(
        resolver: BenefitResolver<'a>,
        profile: &'a EmployeeProfile,
        join_year: Option<i32>,
    ) -> Self {
        Self { resolver, profile, join_year }
    }

    /// Evaluate every death year in the sweep range. Empty when the
    /// timeline never produced a first salary month.
    pub fn run(&self) -> Vec<ComparisonRow> {
        let Some(join_year) = self.join_year else {
            return Vec::new();
        };
        let start = join_year + SWEEP_LEAD_YEARS;
        let end = self.profile.birth_date.year() + SWEEP_TERMINAL_AGE;
        if start >= end {
            return Vec::new();
        }

        let rows: Vec<ComparisonRow> = (start..end)
            .into_par_iter()
            .map(|death_year| {
                let ups = self.resolver.ups_benefit(death_year);
                let nps = self.resolver.nps_benefit(death_year);
                ComparisonRow {
                    death_age: self.profile.death_age(death_year),
                    ups_monthly_pension: ups.monthly_pension,
                    nps_monthly_pension: nps.monthly_pension,
                    ups_lump_sum: ups.lump_sum,
                    nps_lump_sum: nps.lump_sum,
                    ups_value_pv: ups.value_pv,
                    nps_value_pv: nps.value_pv,
                    ups_value_nominal: ups.value_nominal,
                    nps_value_nominal: nps.value_nominal,
                }
            })
            .collect();

        info!("swept {} death years ({}..{})", rows.len(), start, end);
        rows
    }
}

/// Scan the comparison table for changes in the dominant scheme.
///
/// Rows where both present values are zero carry no signal and are skipped.
/// Consecutive rows with the same winner collapse into one entry, so the
/// result is one record per dominance run.
pub fn find_crossovers(rows: &[ComparisonRow]) -> Vec<Crossover> {
    let mut crossovers = Vec::new();
    let mut previous_winner: Option<Scheme> = None;

    for row in rows {
        if row.ups_value_pv == 0.0 && row.nps_value_pv == 0.0 {
            continue;
        }
        let winner = if row.ups_value_pv > row.nps_value_pv {
            Scheme::Ups
        } else {
            Scheme::Nps
        };
        if previous_winner != Some(winner) {
            crossovers.push(Crossover {
                death_age: row.death_age,
                winner,
                ups_value: row.ups_value_pv,
                nps_value: row.nps_value_pv,
            });
            previous_winner = Some(winner);
        }
    }

    crossovers
}
