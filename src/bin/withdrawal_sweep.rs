//! Withdrawal-fraction sensitivity sweep
//!
//! Runs the full comparison once per lumpsum withdrawal fraction from 0% to
//! 60% and reports, for each, the initial dominant scheme, where dominance
//! first flips, and both schemes' values at a reference death age.

use anyhow::Context;
use pension_system::timeline::month_start;
use pension_system::{EmployeeProfile, SchemeParameters, SimulationRunner};
use rayon::prelude::*;
use std::time::Instant;

/// Death age at which the two schemes' values are sampled
const REFERENCE_DEATH_AGE: i32 = 75;

#[derive(Debug, Clone)]
struct SensitivityRow {
    withdrawal_pct: f64,
    initial_winner: &'static str,
    first_flip_age: Option<i32>,
    ups_value_at_reference: f64,
    nps_value_at_reference: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();

    let profile = EmployeeProfile::new(
        month_start(1996, 6),
        month_start(2023, 12),
        month_start(2022, 1),
        60,
        60,
        10,
    );
    let runner = SimulationRunner::new();

    // 0% to 60% in 5-point steps
    let fractions: Vec<f64> = (0..=12).map(|i| i as f64 * 0.05).collect();

    println!("Running {} withdrawal scenarios...", fractions.len());

    let rows: Vec<SensitivityRow> = fractions
        .par_iter()
        .map(|&fraction| {
            let params = SchemeParameters {
                withdrawal_fraction: fraction,
                ..SchemeParameters::default()
            };
            let outcome = runner
                .simulate(&profile, &params)
                .expect("simulation succeeds");

            let reference = outcome
                .comparison
                .iter()
                .find(|r| r.death_age == REFERENCE_DEATH_AGE);

            SensitivityRow {
                withdrawal_pct: fraction * 100.0,
                initial_winner: outcome
                    .crossovers
                    .first()
                    .map(|c| c.winner.as_str())
                    .unwrap_or("-"),
                first_flip_age: outcome.crossovers.get(1).map(|c| c.death_age),
                ups_value_at_reference: reference.map(|r| r.ups_value_pv).unwrap_or(0.0),
                nps_value_at_reference: reference.map(|r| r.nps_value_pv).unwrap_or(0.0),
            }
        })
        .collect();

    println!("Scenarios complete in {:?}\n", start.elapsed());

    println!(
        "{:>6} {:>8} {:>10} {:>18} {:>18}",
        "Wd%", "Initial", "FirstFlip", "UPS PV @75", "NPS PV @75"
    );
    println!("{}", "-".repeat(64));
    for row in &rows {
        println!(
            "{:>6.0} {:>8} {:>10} {:>18.0} {:>18.0}",
            row.withdrawal_pct,
            row.initial_winner,
            row.first_flip_age
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".into()),
            row.ups_value_at_reference,
            row.nps_value_at_reference,
        );
    }

    let output_path = "withdrawal_sensitivity.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {}", output_path))?;
    writer.write_record([
        "WithdrawalPct",
        "InitialWinner",
        "FirstFlipAge",
        "UPSValuePVAtReference",
        "NPSValuePVAtReference",
    ])?;
    for row in &rows {
        writer.write_record([
            format!("{:.0}", row.withdrawal_pct),
            row.initial_winner.to_string(),
            row.first_flip_age
                .map(|a| a.to_string())
                .unwrap_or_default(),
            format!("{:.2}", row.ups_value_at_reference),
            format!("{:.2}", row.nps_value_at_reference),
        ])?;
    }
    writer.flush()?;

    println!("\nOutput written to {}", output_path);
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
