use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::estimator_config::EstimatorConfig;
use crate::models::demand::EnergyDemand;
use crate::models::economics::Economics;
use crate::models::esg::EsgMetrics;
use crate::models::sizing::HardwareSizing;
use crate::utils::logging::{self, EstimationStage, OperationCategory};
use crate::utils::traits::RatingPolicy;

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    ZeroFleet,
    InvalidDistance(f64),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::ZeroFleet => write!(f, "Fleet size must be at least 1"),
            RequestError::InvalidDistance(km) => {
                write!(f, "Annual distance per vehicle must be a non-negative number, got {}", km)
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// Fleet parameters of one estimate.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FleetRequest {
    fleet_size: u32,
    km_per_vehicle_year: f64,
}

impl FleetRequest {
    pub fn new(fleet_size: u32, km_per_vehicle_year: f64) -> Result<Self, RequestError> {
        if fleet_size == 0 {
            return Err(RequestError::ZeroFleet);
        }
        if !km_per_vehicle_year.is_finite() || km_per_vehicle_year < 0.0 {
            return Err(RequestError::InvalidDistance(km_per_vehicle_year));
        }

        Ok(Self { fleet_size, km_per_vehicle_year })
    }

    pub fn fleet_size(&self) -> u32 {
        self.fleet_size
    }

    pub fn km_per_vehicle_year(&self) -> f64 {
        self.km_per_vehicle_year
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputSummary {
    pub fleet_size: u32,
    pub km_per_vehicle_year: f64,
    pub km_total_year: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Capex {
    pub capex_eur: f64,
}

/// Full outcome of one estimate. Every group is always populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateResult {
    pub inputs: InputSummary,
    pub energy: EnergyDemand,
    pub sizing: HardwareSizing,
    pub capex: Capex,
    pub economics: Economics,
    pub esg: EsgMetrics,
}

/// Runs the estimate with the rating bands carried by `config`.
pub fn estimate(request: &FleetRequest, config: &EstimatorConfig) -> EstimateResult {
    estimate_with_policy(request, config, &config.rating_bands)
}

pub fn estimate_with_policy(
    request: &FleetRequest,
    config: &EstimatorConfig,
    rating_policy: &dyn RatingPolicy,
) -> EstimateResult {
    let _timing = logging::start_timing("estimate",
        OperationCategory::Estimation { stage: EstimationStage::Full });

    let fleet_size = request.fleet_size();
    let km_per_vehicle_year = request.km_per_vehicle_year();

    let energy = EnergyDemand::calculate(fleet_size, km_per_vehicle_year, config);
    let sizing = HardwareSizing::size(fleet_size, &energy, config);
    let economics = Economics::evaluate(energy.km_total_year, energy.kwh_total_year, sizing.capex_eur, config);
    let esg = EsgMetrics::calculate(
        economics.diesel_liters_year,
        fleet_size,
        energy.km_total_year,
        config,
        rating_policy,
    );

    tracing::debug!(
        fleet_size,
        km_per_vehicle_year,
        hardware = %sizing.hardware,
        station_count = sizing.station_count,
        decision = %economics.decision,
        "estimate complete"
    );

    EstimateResult {
        inputs: InputSummary {
            fleet_size,
            km_per_vehicle_year,
            km_total_year: energy.km_total_year,
        },
        capex: Capex { capex_eur: sizing.capex_eur },
        energy,
        sizing,
        economics,
        esg,
    }
}
