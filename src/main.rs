//! Pension System CLI
//!
//! Runs the NPS vs UPS comparison for one employee profile and writes the
//! comparison table as CSV plus a Markdown report.

use anyhow::Context;
use clap::Parser;
use pension_system::{
    assumptions::{loader::load_pay_matrix, Assumptions},
    profile::load_scenario,
    ComparisonRow, Crossover, EmployeeProfile, LifecycleFund, SchemeParameters,
    SimulationOutcome, SimulationRunner,
};
use pension_system::timeline::month_start;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Parser)]
#[command(name = "pension_system", about = "NPS vs UPS retirement benefit comparison")]
struct Cli {
    /// JSON scenario file with the employee profile and parameters
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Pay matrix override CSV (level,basic_pay,tenure_months)
    #[arg(long)]
    pay_matrix: Option<PathBuf>,

    /// Lumpsum withdrawal percentage, 0-60
    #[arg(long)]
    withdrawal_percent: Option<f64>,

    /// Actual retirement age override (below normal age means VRS)
    #[arg(long)]
    retirement_age: Option<u8>,

    /// Lifecycle fund: lc75, lc50, or lc25
    #[arg(long)]
    fund: Option<String>,

    /// Comparison table CSV output path
    #[arg(long, default_value = "comparison_output.csv")]
    csv_out: PathBuf,

    /// Markdown report output path
    #[arg(long, default_value = "comparison_report.md")]
    report_out: PathBuf,
}

fn parse_fund(name: &str) -> anyhow::Result<LifecycleFund> {
    match name.to_ascii_lowercase().as_str() {
        "lc75" | "aggressive" => Ok(LifecycleFund::Aggressive),
        "lc50" | "moderate" => Ok(LifecycleFund::Moderate),
        "lc25" | "conservative" => Ok(LifecycleFund::Conservative),
        other => anyhow::bail!("unknown lifecycle fund: {}", other),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("Pension System v0.1.0");
    println!("=====================\n");

    let (mut profile, mut params) = match &cli.scenario {
        Some(path) => {
            let scenario = load_scenario(path)
                .map_err(|e| anyhow::anyhow!("{}", e))
                .with_context(|| format!("loading scenario {}", path.display()))?;
            (scenario.profile, scenario.parameters)
        }
        None => (
            // Reference profile: a 1996-born officer joining in late 2023
            // with seniority backdated to the start of 2022
            EmployeeProfile::new(
                month_start(1996, 6),
                month_start(2023, 12),
                month_start(2022, 1),
                60,
                60,
                10,
            ),
            SchemeParameters::default(),
        ),
    };

    if let Some(pct) = cli.withdrawal_percent {
        params.withdrawal_fraction = pct / 100.0;
    }
    if let Some(age) = cli.retirement_age {
        profile.retirement_age = age;
    }
    if let Some(fund) = &cli.fund {
        params.lifecycle_fund = parse_fund(fund)?;
    }

    let runner = match &cli.pay_matrix {
        Some(path) => {
            let matrix = load_pay_matrix(path)
                .map_err(|e| anyhow::anyhow!("{}", e))
                .with_context(|| format!("loading pay matrix {}", path.display()))?;
            SimulationRunner::with_assumptions(Assumptions {
                pay_matrix: matrix,
                ..Assumptions::default_scheme()
            })
        }
        None => SimulationRunner::new(),
    };

    println!("Profile:");
    println!("  Born: {}", profile.birth_date);
    println!("  Joined: {}", profile.joining_date);
    println!("  Seniority from: {}", profile.seniority_date);
    println!(
        "  Retirement: {} (age {})",
        profile.retirement_date(),
        profile.retirement_age
    );
    println!("  Lifecycle fund: {}", params.lifecycle_fund.code());
    println!(
        "  Withdrawal: {:.0}%",
        params.clamped_withdrawal() * 100.0
    );
    println!();

    if profile.is_vrs() {
        println!(
            "Note: VRS case - UPS pension starts only from {} (normal retirement age)",
            profile.normal_retirement_year()
        );
        if profile.service_months_at_retirement() < 300 {
            println!(
                "WARNING: voluntary retirement normally requires 25 years of qualifying \
                 service; this profile has {:.1} years",
                profile.service_months_at_retirement() as f64 / 12.0
            );
        }
        println!();
    }

    let outcome = runner.simulate(&profile, &params)?;

    print_progression(&outcome, &params);
    print_summary(&outcome, &profile);

    write_comparison_csv(&cli.csv_out, &outcome.comparison)
        .with_context(|| format!("writing {}", cli.csv_out.display()))?;
    println!("Comparison table written to: {}", cli.csv_out.display());

    write_markdown_report(&cli.report_out, &profile, &params, &outcome)
        .with_context(|| format!("writing {}", cli.report_out.display()))?;
    println!("Markdown report written to: {}", cli.report_out.display());

    Ok(())
}

fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month as usize - 1) % 12]
}

fn print_progression(outcome: &SimulationOutcome, params: &SchemeParameters) {
    println!("Salary and NPS Corpus Progression (key months):");
    println!(
        "{:>4} {:>5} {:>6} {:>14} {:>14} {:>16}",
        "Year", "Month", "Level", "Basic Pay", "Gross Salary", "NPS Corpus"
    );
    println!("{}", "-".repeat(64));
    for record in outcome.timeline.key_months(params) {
        println!(
            "{:>4} {:>5} {:>6} {:>14.2} {:>14.2} {:>16.2}",
            record.year,
            month_name(record.month),
            record.pay_level,
            record.basic_pay,
            record.gross_salary,
            record.nps_corpus,
        );
    }
    println!();
}

fn print_summary(outcome: &SimulationOutcome, profile: &EmployeeProfile) {
    println!("Which scheme is better at different death ages:");
    if outcome.crossovers.is_empty() {
        println!("  No data available for comparison");
        return;
    }
    for crossover in &outcome.crossovers {
        if crossover.death_age > profile.retirement_age as i32 {
            println!("  From age {}: {} is better", crossover.death_age, crossover.winner.as_str());
        } else {
            println!(
                "  From age {} (in service): {} is better",
                crossover.death_age,
                crossover.winner.as_str()
            );
        }
        println!("    UPS value: {:.2}", crossover.ups_value);
        println!("    NPS value: {:.2}", crossover.nps_value);
        println!(
            "    Difference: {:.2}",
            (crossover.ups_value - crossover.nps_value).abs()
        );
    }
    println!();
}

fn write_comparison_csv(path: &PathBuf, rows: &[ComparisonRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "DeathAge",
        "UPSMonthlyPension",
        "NPSMonthlyPension",
        "UPSLumpSum",
        "NPSLumpSum",
        "UPSValuePV",
        "NPSValuePV",
        "UPSValueNominal",
        "NPSValueNominal",
    ])?;
    for row in rows {
        writer.write_record([
            row.death_age.to_string(),
            format!("{:.2}", row.ups_monthly_pension),
            format!("{:.2}", row.nps_monthly_pension),
            format!("{:.2}", row.ups_lump_sum),
            format!("{:.2}", row.nps_lump_sum),
            format!("{:.2}", row.ups_value_pv),
            format!("{:.2}", row.nps_value_pv),
            format!("{:.2}", row.ups_value_nominal),
            format!("{:.2}", row.nps_value_nominal),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_markdown_report(
    path: &PathBuf,
    profile: &EmployeeProfile,
    params: &SchemeParameters,
    outcome: &SimulationOutcome,
) -> anyhow::Result<()> {
    let mut f = File::create(path)?;

    writeln!(f, "# Monthly-Based Corpus Comparison (UPS vs NPS)\n")?;

    writeln!(f, "## Inputs\n")?;
    writeln!(f, "- **Birth date**: {}", profile.birth_date)?;
    writeln!(f, "- **Joining date**: {}", profile.joining_date)?;
    writeln!(f, "- **Seniority date**: {}", profile.seniority_date)?;
    writeln!(f, "- **Normal retirement age**: {}", profile.normal_retirement_age)?;
    writeln!(f, "- **Actual retirement age**: {}", profile.retirement_age)?;
    writeln!(f, "- **Spouse survival offset**: {} years", profile.spouse_survival_offset)?;
    writeln!(f, "- **Inflation rate**: {}", params.inflation_rate)?;
    writeln!(f, "- **Fitment factor**: {:.4}", params.fitment_factor)?;
    writeln!(f, "- **Lifecycle fund**: {}", params.lifecycle_fund.code())?;
    writeln!(f, "- **Equity return**: {}", params.equity_return)?;
    writeln!(f, "- **Corporate bond return**: {}", params.corporate_bond_return)?;
    writeln!(f, "- **G-Sec return**: {}", params.gsec_return)?;
    writeln!(f, "- **Annuity rate**: {}", params.annuity_rate)?;
    writeln!(f, "- **Withdrawal fraction**: {}", params.clamped_withdrawal())?;
    writeln!(f, "- **Pay commission interval**: {} years", params.pay_commission_interval)?;
    writeln!(f, "\n---\n")?;

    writeln!(f, "## Salary Progression\n")?;
    writeln!(f, "| Year | Month | Pay Level | Basic Pay | Gross Salary | NPS Corpus |")?;
    writeln!(f, "|------|-------|-----------|-----------|--------------|------------|")?;
    for record in outcome.timeline.key_months(params) {
        writeln!(
            f,
            "| {} | {} | Level {} | {:.2} | {:.2} | {:.2} |",
            record.year,
            month_name(record.month),
            record.pay_level,
            record.basic_pay,
            record.gross_salary,
            record.nps_corpus,
        )?;
    }
    writeln!(f, "\n---\n")?;

    writeln!(f, "## NPS vs UPS Comparison Across Death Ages\n")?;
    writeln!(
        f,
        "| Death Age | UPS Pension | NPS Pension | UPS Lump Sum | NPS Lump Sum | \
         UPS Value (PV) | NPS Value (PV) | UPS Value (Nominal) | NPS Value (Nominal) |"
    )?;
    writeln!(f, "|{}", " --- |".repeat(9))?;
    for row in &outcome.comparison {
        writeln!(
            f,
            "| {} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} | {:.0} |",
            row.death_age,
            row.ups_monthly_pension,
            row.nps_monthly_pension,
            row.ups_lump_sum,
            row.nps_lump_sum,
            row.ups_value_pv,
            row.nps_value_pv,
            row.ups_value_nominal,
            row.nps_value_nominal,
        )?;
    }
    writeln!(f, "\n---\n")?;

    writeln!(f, "## Summary: Which Scheme Is Better\n")?;
    if outcome.crossovers.is_empty() {
        writeln!(f, "No data available for comparison.")?;
    }
    for Crossover { death_age, winner, ups_value, nps_value } in &outcome.crossovers {
        writeln!(f, "- From age **{}**: **{}** is better", death_age, winner.as_str())?;
        writeln!(f, "  - UPS value: {:.2}", ups_value)?;
        writeln!(f, "  - NPS value: {:.2}", nps_value)?;
        writeln!(f, "  - Difference: {:.2}", (ups_value - nps_value).abs())?;
    }

    Ok(())
}
