use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;

use evfleet::analysis::reporting;
use evfleet::cli::cli::Args;
use evfleet::config::estimator_config::{ConfigPreset, EstimatorConfig};
use evfleet::core::batch::{run_batch, BatchOutcome};
use evfleet::core::estimator::{estimate, FleetRequest};
use evfleet::data::fleet_loader;
use evfleet::utils::csv_export::CsvExporter;
use evfleet::utils::logging::{self, FileIOType, OperationCategory};

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging())
        .map_err(|e| anyhow!("failed to initialise logging: {}", e))?;

    let config = load_config(&args)?;

    let outcomes = match args.batch() {
        Some(path) => {
            let fleets = fleet_loader::load_fleets(path)
                .with_context(|| format!("loading fleets from {}", path))?;
            run_batch(&fleets, &config, args.parallel(), !args.json())
        }
        None => {
            let (fleet_size, km) = match (args.fleet_size(), args.km_per_vehicle_year()) {
                (Some(n), Some(km)) => (n, km),
                _ => bail!("either --batch or both --fleet-size and --km-per-vehicle-year are required"),
            };
            let request = FleetRequest::new(fleet_size, km)?;
            vec![BatchOutcome {
                label: "fleet".to_string(),
                result: estimate(&request, &config),
            }]
        }
    };

    if args.json() {
        let results: Vec<_> = outcomes.iter().map(|o| &o.result).collect();
        let json = if results.len() == 1 {
            serde_json::to_string_pretty(results[0])?
        } else {
            serde_json::to_string_pretty(&results)?
        };
        println!("{}", json);
    } else {
        for outcome in &outcomes {
            reporting::print_estimate_summary(&outcome.label, &outcome.result);
            reporting::print_sizing_details(&outcome.result);
        }
    }

    if let Some(output_dir) = args.output_dir() {
        let exporter = CsvExporter::new(output_dir)
            .with_context(|| format!("creating export directory under {}", output_dir))?;
        let path = exporter.export_results(outcomes.iter().map(|o| (o.label.as_str(), &o.result)))?;
        eprintln!("Results written to {}", path.display());
    }

    logging::print_timing_report();

    Ok(())
}

fn load_config(args: &Args) -> Result<EstimatorConfig> {
    let _timing = logging::start_timing("load_config",
        OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });

    let preset: ConfigPreset = args.preset().parse().map_err(|e: String| anyhow!(e))?;
    let base = EstimatorConfig::from_preset(preset);

    let config = match args.config() {
        Some(path) => EstimatorConfig::load_overlay(&base, path)
            .with_context(|| format!("loading config overrides from {}", path))?,
        None => base,
    };
    config.validate()?;

    tracing::debug!(preset = %preset, overrides = args.config().is_some(), "configuration ready");
    Ok(config)
}
