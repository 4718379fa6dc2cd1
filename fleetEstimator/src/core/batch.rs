use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::estimator::{estimate, EstimateResult};
use crate::config::estimator_config::EstimatorConfig;
use crate::data::fleet_loader::FleetRecord;
use crate::utils::logging::{self, OperationCategory};

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub label: String,
    pub result: EstimateResult,
}

/// Estimates every fleet independently. Output order matches input order.
pub fn run_batch(fleets: &[FleetRecord], config: &EstimatorConfig, parallel: bool, show_progress: bool) -> Vec<BatchOutcome> {
    let _timing = logging::start_timing("run_batch", OperationCategory::Batch);

    let progress = if show_progress {
        let bar = ProgressBar::new(fleets.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} fleets ({elapsed})") {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let evaluate = |fleet: &FleetRecord| {
        let outcome = BatchOutcome {
            label: fleet.label.clone(),
            result: estimate(&fleet.request, config),
        };
        progress.inc(1);
        outcome
    };

    let outcomes: Vec<BatchOutcome> = if parallel {
        fleets.par_iter().map(evaluate).collect()
    } else {
        fleets.iter().map(evaluate).collect()
    };

    progress.finish_and_clear();

    let go_count = outcomes.iter().filter(|o| o.result.economics.decision.is_go()).count();
    tracing::info!(fleets = outcomes.len(), go = go_count, parallel, "batch complete");

    outcomes
}
