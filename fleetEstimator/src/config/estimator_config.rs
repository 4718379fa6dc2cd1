use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::constants::*;
use crate::models::charger_tier::TierPolicy;
use crate::models::esg::RatingBands;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(s) => write!(f, "Invalid configuration: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable parameters of one estimate. Immutable for the duration of a computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EstimatorConfig {
    pub charging_window_hours: f64,

    pub ac_rotation: u32,
    pub dc_rotation: u32,

    pub ac_power_effective_kw: f64,
    pub dc30_power_kw: f64,
    pub dc60_power_kw: f64,

    pub ac22_acquisition_eur: f64,
    pub ac22_installation_eur: f64,
    pub dc30_acquisition_eur: f64,
    pub dc30_installation_eur: f64,
    pub dc60_acquisition_eur: f64,
    pub dc60_installation_eur: f64,

    pub ev_kwh_per_km: f64,
    pub energy_internal_eur_per_kwh: f64,

    pub diesel_km_per_l: f64,
    pub diesel_eur_per_l: f64,
    pub diesel_kgco2_per_l: f64,

    pub trees_per_ton_co2: f64,
    pub payback_threshold_years: f64,

    pub peak_factor: f64,            // 1.0 sizes hardware on average demand
    pub working_days_per_year: f64,  // Divisor for daily distance per vehicle

    pub tier_policy: TierPolicy,
    pub rating_bands: RatingBands,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            charging_window_hours: DEFAULT_CHARGING_WINDOW_HOURS,
            ac_rotation: DEFAULT_AC_ROTATION,
            dc_rotation: DEFAULT_DC_ROTATION,
            ac_power_effective_kw: DEFAULT_AC_POWER_EFFECTIVE_KW,
            dc30_power_kw: DEFAULT_DC30_POWER_KW,
            dc60_power_kw: DEFAULT_DC60_POWER_KW,
            ac22_acquisition_eur: DEFAULT_AC22_ACQUISITION_EUR,
            ac22_installation_eur: DEFAULT_AC22_INSTALLATION_EUR,
            dc30_acquisition_eur: DEFAULT_DC30_ACQUISITION_EUR,
            dc30_installation_eur: DEFAULT_DC30_INSTALLATION_EUR,
            dc60_acquisition_eur: DEFAULT_DC60_ACQUISITION_EUR,
            dc60_installation_eur: DEFAULT_DC60_INSTALLATION_EUR,
            ev_kwh_per_km: DEFAULT_EV_KWH_PER_KM,
            energy_internal_eur_per_kwh: DEFAULT_ENERGY_INTERNAL_EUR_PER_KWH,
            diesel_km_per_l: DEFAULT_DIESEL_KM_PER_L,
            diesel_eur_per_l: DEFAULT_DIESEL_EUR_PER_L,
            diesel_kgco2_per_l: DEFAULT_DIESEL_KGCO2_PER_L,
            trees_per_ton_co2: DEFAULT_TREES_PER_TON_CO2,
            payback_threshold_years: DEFAULT_PAYBACK_THRESHOLD_YEARS,
            peak_factor: NO_PEAK_FACTOR,
            working_days_per_year: CALENDAR_DAYS_PER_YEAR,
            tier_policy: TierPolicy::default(),
            rating_bands: RatingBands::standard(),
        }
    }
}

impl EstimatorConfig {
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Baseline => Self::default(),
            ConfigPreset::WorkingDays => Self {
                working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
                ..Self::default()
            },
            ConfigPreset::PeakAware => Self {
                working_days_per_year: DEFAULT_WORKING_DAYS_PER_YEAR,
                peak_factor: DEFAULT_PEAK_FACTOR,
                rating_bands: RatingBands::extended(),
                ..Self::default()
            },
        }
    }

    /// Reads a JSON object from `path` and lays its keys over `base`.
    ///
    /// Keys missing from the file keep the base value, so a file holding only
    /// `{"diesel_eur_per_l": 1.9}` adjusts the diesel price of whichever preset was chosen.
    /// Nested objects merge the same way; arrays such as `rating_bands.bands` are replaced whole.
    pub fn load_overlay(base: &EstimatorConfig, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::overlay_json(base, &contents)
    }

    pub fn overlay_json(base: &EstimatorConfig, contents: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(contents)?;
        let overrides = match overrides {
            serde_json::Value::Object(map) => map,
            _ => return Err(ConfigError::Invalid("config file must contain a JSON object".to_string())),
        };

        let mut merged = serde_json::to_value(base)?;
        if let serde_json::Value::Object(fields) = &mut merged {
            merge_fields(fields, overrides, "")?;
        }

        let config: EstimatorConfig = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the engine relies on. The engine itself never calls this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("ac22_acquisition_eur", self.ac22_acquisition_eur),
            ("ac22_installation_eur", self.ac22_installation_eur),
            ("dc30_acquisition_eur", self.dc30_acquisition_eur),
            ("dc30_installation_eur", self.dc30_installation_eur),
            ("dc60_acquisition_eur", self.dc60_acquisition_eur),
            ("dc60_installation_eur", self.dc60_installation_eur),
            ("ev_kwh_per_km", self.ev_kwh_per_km),
            ("energy_internal_eur_per_kwh", self.energy_internal_eur_per_kwh),
            ("diesel_km_per_l", self.diesel_km_per_l),
            ("diesel_eur_per_l", self.diesel_eur_per_l),
            ("diesel_kgco2_per_l", self.diesel_kgco2_per_l),
            ("trees_per_ton_co2", self.trees_per_ton_co2),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be non-negative, got {}", name, value)));
            }
        }

        let positive = [
            ("charging_window_hours", self.charging_window_hours),
            ("ac_power_effective_kw", self.ac_power_effective_kw),
            ("dc30_power_kw", self.dc30_power_kw),
            ("dc60_power_kw", self.dc60_power_kw),
            ("payback_threshold_years", self.payback_threshold_years),
            ("peak_factor", self.peak_factor),
            ("working_days_per_year", self.working_days_per_year),
            ("tier_policy.dc_threshold_kwh", self.tier_policy.dc_threshold_kwh),
            ("tier_policy.dc60_threshold_kwh", self.tier_policy.dc60_threshold_kwh),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.ac_rotation == 0 || self.dc_rotation == 0 {
            return Err(ConfigError::Invalid("rotations must be at least 1".to_string()));
        }

        if self.tier_policy.dc60_threshold_kwh < self.tier_policy.dc_threshold_kwh {
            return Err(ConfigError::Invalid(
                "tier_policy.dc60_threshold_kwh must not be below dc_threshold_kwh".to_string(),
            ));
        }

        self.rating_bands.validate().map_err(ConfigError::Invalid)
    }
}

fn merge_fields(
    fields: &mut serde_json::Map<String, serde_json::Value>,
    overrides: serde_json::Map<String, serde_json::Value>,
    prefix: &str,
) -> Result<(), ConfigError> {
    for (key, value) in overrides {
        let path = format!("{}{}", prefix, key);
        match (fields.get_mut(&key), value) {
            (None, _) => return Err(ConfigError::Invalid(format!("unknown field '{}'", path))),
            (Some(serde_json::Value::Object(nested)), serde_json::Value::Object(nested_overrides)) => {
                merge_fields(nested, nested_overrides, &format!("{}.", path))?;
            }
            (Some(slot), value) => *slot = value,
        }
    }
    Ok(())
}

/// Named configurations reproducing each historical variant of the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    Baseline,     // Calendar days, average demand, {1, 5} bands
    WorkingDays,  // 240 working days, average demand
    PeakAware,    // 240 working days, peak sizing, {1, 3, 10} bands
}

impl FromStr for ConfigPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "baseline" => Ok(ConfigPreset::Baseline),
            "working-days" | "working_days" => Ok(ConfigPreset::WorkingDays),
            "peak-aware" | "peak_aware" => Ok(ConfigPreset::PeakAware),
            _ => Err(format!("Unknown config preset: {}", s)),
        }
    }
}

impl fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigPreset::Baseline => write!(f, "baseline"),
            ConfigPreset::WorkingDays => write!(f, "working-days"),
            ConfigPreset::PeakAware => write!(f, "peak-aware"),
        }
    }
}
