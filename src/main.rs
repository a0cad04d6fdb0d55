// src/main.rs
//
// Usage:
//   inventory-analytics                          # Classroom scenario, 5-day lead time
//   inventory-analytics --config run.json        # Parameters from JSON
//   inventory-analytics --lead-time 8            # Lead time for scenario 2 (else the
//                                                # config file's value, else 5 days)
//   inventory-analytics --threshold 0.1          # Prescriptive shortage threshold
//   inventory-analytics --export results/        # Write both runs as CSV

use anyhow::{bail, Context, Result};
use inventory_analytics::analytics::{analyze, AnalyticsReport};
use inventory_analytics::io::config::RunConfig;
use inventory_analytics::io::reporting;
use inventory_analytics::io::summary::{Comparison, ScenarioSummary};
use inventory_analytics::{logging, InventorySimulation, SimulationParameters};
use std::path::PathBuf;
use tracing::info;

const DEFAULT_SCENARIO_LEAD_TIME: u32 = 5;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    lead_time: Option<u32>,
    threshold: Option<f64>,
    export: Option<PathBuf>,
    help: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--lead-time" => {
                let raw = value("--lead-time")?;
                cli.lead_time = Some(
                    raw.parse()
                        .with_context(|| format!("invalid lead time: {raw}"))?,
                );
            }
            "--threshold" => {
                let raw = value("--threshold")?;
                cli.threshold = Some(
                    raw.parse()
                        .with_context(|| format!("invalid threshold: {raw}"))?,
                );
            }
            "--export" => cli.export = Some(PathBuf::from(value("--export")?)),
            "-h" | "--help" => cli.help = true,
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(cli)
}

fn print_usage() {
    println!("Usage: inventory-analytics [--config FILE] [--lead-time DAYS] [--threshold RATE] [--export DIR]");
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init();

    let cli = parse_args(std::env::args().skip(1))?;
    if cli.help {
        print_usage();
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => RunConfig::from_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => RunConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.analytics.shortage_threshold = threshold;
    }
    config
        .analytics
        .validate()
        .with_context(|| format!("invalid threshold: {}", config.analytics.shortage_threshold))?;

    // Scenario 1: orders land the day they are placed
    let basic_params = config.parameters.with_lead_time(0);
    let basic_sim = InventorySimulation::new(basic_params.clone())?;
    let basic_records = basic_sim.run_basic();
    let basic_report = analyze(&basic_records, &config.analytics)?;

    // Scenario 2: same policy with a delivery delay
    let lead_time = scenario_lead_time(&cli, &config);
    let delayed_params = config.parameters.with_lead_time(lead_time);
    let delayed_sim = InventorySimulation::new(delayed_params.clone())?;
    let delayed_records = delayed_sim.run_with_lead_time();
    let delayed_report = analyze(&delayed_records, &config.analytics)?;

    print_scenario("Scenario 1: basic ordering (no lead time)", &basic_params, &basic_report);
    print_scenario(
        &format!("Scenario 2: ordering with a {lead_time}-day lead time"),
        &delayed_params,
        &delayed_report,
    );

    let basic_label = "Scenario 1 (no lead time)".to_string();
    let delayed_label = format!("Scenario 2 ({lead_time}-day lead time)");
    println!(
        "{}",
        Comparison {
            scenarios: &[
                (basic_label.as_str(), &basic_report.descriptive),
                (delayed_label.as_str(), &delayed_report.descriptive),
            ],
        }
    );

    if let Some(dir) = &cli.export {
        reporting::write_simulation_log(dir.join("scenario_1_basic.csv"), &basic_records)
            .context("exporting scenario 1")?;
        reporting::write_simulation_log(dir.join("scenario_2_lead_time.csv"), &delayed_records)
            .context("exporting scenario 2")?;
    }

    info!("All scenarios complete");
    Ok(())
}

/// Lead time for scenario 2: the `--lead-time` flag, else the config file's
/// `lead_time_days` taken as written (zero included), else five days.
fn scenario_lead_time(cli: &CliArgs, config: &RunConfig) -> u32 {
    match (cli.lead_time, &cli.config) {
        (Some(days), _) => days,
        (None, Some(_)) => config.parameters.lead_time_days,
        (None, None) => DEFAULT_SCENARIO_LEAD_TIME,
    }
}

fn print_scenario(
    title: &str,
    params: &SimulationParameters,
    report: &AnalyticsReport,
) {
    println!(
        "{}",
        ScenarioSummary {
            title,
            params,
            report,
        }
    );
}
