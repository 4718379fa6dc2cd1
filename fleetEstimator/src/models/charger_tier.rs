use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::constants::*;
use crate::config::estimator_config::EstimatorConfig;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChargerTier {
    Ac22,   // AC 22kW station, effective 11kW
    Dc30,   // DC tier 1
    Dc60,   // DC tier 2
}

impl ChargerTier {
    pub fn hardware_label(&self) -> &'static str {
        match self {
            ChargerTier::Ac22 => AC22_LABEL,
            ChargerTier::Dc30 => DC30_LABEL,
            ChargerTier::Dc60 => DC60_LABEL,
        }
    }

    pub fn effective_power_kw(&self, config: &EstimatorConfig) -> f64 {
        match self {
            ChargerTier::Ac22 => config.ac_power_effective_kw,
            ChargerTier::Dc30 => config.dc30_power_kw,
            ChargerTier::Dc60 => config.dc60_power_kw,
        }
    }

    pub fn rotation(&self, config: &EstimatorConfig) -> u32 {
        match self {
            ChargerTier::Ac22 => config.ac_rotation,
            ChargerTier::Dc30 | ChargerTier::Dc60 => config.dc_rotation,
        }
    }

    /// Acquisition plus installation cost of a single station.
    pub fn unit_cost_eur(&self, config: &EstimatorConfig) -> f64 {
        match self {
            ChargerTier::Ac22 => config.ac22_acquisition_eur + config.ac22_installation_eur,
            ChargerTier::Dc30 => config.dc30_acquisition_eur + config.dc30_installation_eur,
            ChargerTier::Dc60 => config.dc60_acquisition_eur + config.dc60_installation_eur,
        }
    }
}

impl fmt::Display for ChargerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hardware_label())
    }
}

/// Decision boundaries for choosing a hardware tier from per-vehicle daily energy.
///
/// The boundaries are business policy and are compared strictly: a vehicle needing
/// exactly `dc_threshold_kwh` still charges on AC.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TierPolicy {
    pub dc_threshold_kwh: f64,
    pub dc60_threshold_kwh: f64,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            dc_threshold_kwh: DC_REQUIRED_KWH_PER_VEHICLE_DAY,
            dc60_threshold_kwh: DC60_REQUIRED_KWH_PER_VEHICLE_DAY,
        }
    }
}

impl TierPolicy {
    pub fn select(&self, kwh_per_vehicle_day: f64) -> ChargerTier {
        if kwh_per_vehicle_day <= self.dc_threshold_kwh {
            return ChargerTier::Ac22;
        }

        if kwh_per_vehicle_day > self.dc60_threshold_kwh {
            ChargerTier::Dc60
        } else {
            ChargerTier::Dc30
        }
    }
}
