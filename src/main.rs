//! Cashflow Planner CLI
//!
//! Command-line interface for running cash-flow projections and loan schedules

use anyhow::{Context, Result};
use cashflow_planner::items::load_items;
use cashflow_planner::projection::{ScheduleTotals, StandardHorizon};
use cashflow_planner::{
    summarize, LoanSummary, LoanTerms, PaymentFrequency, PaymentRow, PeriodResult, ProjectionEngine,
    ProjectionHorizon, ProjectionSummary,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "cashflow_planner", version, about = "Cash-flow projections and loan schedules")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project recurring items over a horizon
    Project {
        /// Items file (.csv or .json)
        #[arg(long)]
        items: PathBuf,

        /// Opening balance
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        opening: f64,

        /// Number of periods: 6, 12, 24, 36 or 60
        #[arg(long, default_value_t = 12)]
        periods: u32,

        /// Write the schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Build a fixed-payment loan schedule
    Amortize {
        #[arg(long)]
        principal: f64,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,

        /// Term in years
        #[arg(long)]
        years: f64,

        /// monthly, quarterly or annually
        #[arg(long, default_value = "monthly")]
        frequency: PaymentFrequency,

        /// Write the schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// JSON output for the project command
#[derive(Serialize)]
struct ProjectionOutput<'a> {
    periods: &'a [PeriodResult],
    summary: &'a ProjectionSummary,
    totals: &'a ScheduleTotals,
}

/// JSON output for the amortize command
#[derive(Serialize)]
struct LoanOutput<'a> {
    terms: &'a LoanTerms,
    schedule: &'a [PaymentRow],
    summary: &'a LoanSummary,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project { items, opening, periods, csv, json } => {
            run_projection(&items, opening, periods, csv.as_deref(), json)
        }
        Command::Amortize { principal, rate, years, frequency, csv, json } => {
            run_amortization(LoanTerms::new(principal, rate, years, frequency), csv.as_deref(), json)
        }
    }
}

fn run_projection(items_path: &Path, opening: f64, periods: u32, csv: Option<&Path>, json: bool) -> Result<()> {
    let standard = StandardHorizon::try_from(periods)?;
    let horizon = ProjectionHorizon::standard(standard, opening);

    let items = load_items(items_path)
        .with_context(|| format!("failed to load items from {}", items_path.display()))?;
    log::info!("Loaded {} items from {}", items.len(), items_path.display());

    let result = ProjectionEngine::new(horizon).project(&items);
    let summary = summarize(&items, &horizon);
    let totals = result.totals();

    if let Some(path) = csv {
        write_csv(path, &result.periods)?;
        log::info!("Schedule written to {}", path.display());
    }

    if json {
        let output = ProjectionOutput {
            periods: &result.periods,
            summary: &summary,
            totals: &totals,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Projection ({} periods, opening balance {:.2}):", horizon.period_count, opening);
    println!("{:>6} {:>12} {:>12} {:>12} {:>14}", "Period", "Inflow", "Outflow", "Net", "Balance");
    println!("{}", "-".repeat(60));
    for row in &result.periods {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>14.2}{}",
            row.period,
            row.inflow_total,
            row.outflow_total,
            row.net,
            row.running_balance,
            if row.is_negative { "  (negative)" } else { "" },
        );
    }

    println!("\nSchedule:");
    println!("  Ending Balance: {:.2}", totals.ending_balance);
    println!("  Min / Max Balance: {:.2} / {:.2}", totals.min_balance, totals.max_balance);
    if let Some(period) = totals.first_negative_period {
        println!("  First Negative Period: {}", period);
    }

    println!("\nSummary (steady state):");
    println!("  Total Inflow: {:.2}", summary.total_inflow);
    println!("  Total Outflow: {:.2}", summary.total_outflow);
    println!("  Net Cash Flow: {:.2}", summary.net_cash_flow);
    println!("  Ending Balance: {:.2}", summary.ending_balance);
    println!("  Periods Negative / Positive: {} / {}", summary.periods_negative, summary.periods_positive);
    println!("  Burn Rate: {:.2}", summary.burn_rate);
    println!("  Runway: {}", summary.runway);

    Ok(())
}

fn run_amortization(terms: LoanTerms, csv: Option<&Path>, json: bool) -> Result<()> {
    let schedule = terms.schedule();
    if schedule.is_empty() {
        log::warn!("Loan parameters produce no payments: {:?}", terms);
    }
    let summary = terms.summary();

    if let Some(path) = csv {
        write_csv(path, &schedule)?;
        log::info!("Schedule written to {}", path.display());
    }

    if json {
        let output = LoanOutput {
            terms: &terms,
            schedule: &schedule,
            summary: &summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{:>6} {:>12} {:>12} {:>12} {:>14}", "No.", "Payment", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(60));
    for row in &schedule {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.number, row.payment, row.principal, row.interest, row.balance
        );
    }

    println!("\nSummary:");
    println!("  Payment: {:.2}", summary.payment);
    println!("  Number of Payments: {}", summary.number_of_payments);
    println!("  Total Paid: {:.2}", summary.total_paid);
    println!("  Total Interest: {:.2}", summary.total_interest);

    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("unable to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
