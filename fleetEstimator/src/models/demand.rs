use serde::{Deserialize, Serialize};

use crate::config::estimator_config::EstimatorConfig;
use crate::utils::logging::{self, EstimationStage, OperationCategory};

/// Daily and yearly energy demand of the fleet, per vehicle and fleet-wide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyDemand {
    pub km_total_year: f64,
    pub km_per_vehicle_day: f64,
    pub kwh_per_vehicle_day: f64,
    pub kwh_total_day: f64,        // Average day
    pub kwh_total_day_peak: f64,   // Average day scaled by the peak factor
    pub kwh_total_year: f64,
}

impl EnergyDemand {
    pub fn calculate(fleet_size: u32, km_per_vehicle_year: f64, config: &EstimatorConfig) -> Self {
        let _timing = logging::start_timing("EnergyDemand::calculate",
            OperationCategory::Estimation { stage: EstimationStage::Demand });

        let vehicles = fleet_size as f64;
        let km_total_year = vehicles * km_per_vehicle_year;
        let km_per_vehicle_day = km_per_vehicle_year / config.working_days_per_year;
        let kwh_per_vehicle_day = km_per_vehicle_day * config.ev_kwh_per_km;
        let kwh_total_day = vehicles * kwh_per_vehicle_day;
        let kwh_total_day_peak = kwh_total_day * config.peak_factor;
        let kwh_total_year = km_total_year * config.ev_kwh_per_km;

        tracing::debug!(
            km_total_year,
            kwh_per_vehicle_day,
            kwh_total_day,
            kwh_total_day_peak,
            "energy demand calculated"
        );

        Self {
            km_total_year,
            km_per_vehicle_day,
            kwh_per_vehicle_day,
            kwh_total_day,
            kwh_total_day_peak,
            kwh_total_year,
        }
    }

    /// Fleet-wide daily demand the charging hardware must cover.
    pub fn sizing_demand_kwh(&self) -> f64 {
        self.kwh_total_day_peak
    }
}
