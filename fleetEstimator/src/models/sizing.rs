use serde::{Deserialize, Serialize};

use super::charger_tier::ChargerTier;
use super::demand::EnergyDemand;
use crate::config::estimator_config::EstimatorConfig;
use crate::utils::logging::{self, EstimationStage, OperationCategory};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BindingConstraint {
    Rotation,
    Energy,
    Both,   // Constraints agree on the station count
}

/// Charging hardware chosen for the fleet and the two constraints that fixed its size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HardwareSizing {
    pub tier: ChargerTier,
    pub hardware: String,
    pub station_count: u32,
    pub stations_by_rotation: u32,
    pub stations_by_energy: u32,
    pub binding_constraint: BindingConstraint,
    pub kwh_per_station_day: f64,
    pub capex_eur: f64,
}

impl HardwareSizing {
    pub fn size(fleet_size: u32, demand: &EnergyDemand, config: &EstimatorConfig) -> Self {
        let _timing = logging::start_timing("HardwareSizing::size",
            OperationCategory::Estimation { stage: EstimationStage::Sizing });

        let tier = config.tier_policy.select(demand.kwh_per_vehicle_day);
        let kwh_per_station_day = tier.effective_power_kw(config) * config.charging_window_hours;

        let stations_by_rotation = stations_by_rotation(fleet_size, tier.rotation(config));
        let stations_by_energy = stations_by_energy(demand.sizing_demand_kwh(), kwh_per_station_day);
        let station_count = stations_by_rotation.max(stations_by_energy);

        let binding_constraint = match stations_by_rotation.cmp(&stations_by_energy) {
            std::cmp::Ordering::Greater => BindingConstraint::Rotation,
            std::cmp::Ordering::Less => BindingConstraint::Energy,
            std::cmp::Ordering::Equal => BindingConstraint::Both,
        };

        let capex_eur = station_count as f64 * tier.unit_cost_eur(config);

        tracing::debug!(
            tier = %tier,
            station_count,
            stations_by_rotation,
            stations_by_energy,
            capex_eur,
            "hardware sized"
        );

        Self {
            tier,
            hardware: tier.hardware_label().to_string(),
            station_count,
            stations_by_rotation,
            stations_by_energy,
            binding_constraint,
            kwh_per_station_day,
            capex_eur,
        }
    }
}

/// Stations needed so every vehicle gets a slot within the day.
pub fn stations_by_rotation(fleet_size: u32, rotation: u32) -> u32 {
    fleet_size.div_ceil(rotation)
}

/// Stations needed to deliver the daily energy, 0 when nothing has to be delivered.
pub fn stations_by_energy(demand_kwh_day: f64, kwh_per_station_day: f64) -> u32 {
    if demand_kwh_day <= 0.0 {
        return 0;
    }
    (demand_kwh_day / kwh_per_station_day).ceil() as u32
}
