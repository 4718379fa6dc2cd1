use serde::{Deserialize, Serialize};

use crate::config::constants::*;
use crate::config::estimator_config::EstimatorConfig;
use crate::utils::logging::{self, EstimationStage, OperationCategory};
use crate::utils::traits::RatingPolicy;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingBand {
    pub threshold_tons: f64,
    pub label: String,
}

/// Step function from avoided CO2 tonnes to an ordered label set.
///
/// A value at or above a band's threshold takes that band's label; values below the
/// first threshold take `floor_label`. Thresholds must be strictly ascending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RatingBands {
    pub floor_label: String,
    pub bands: Vec<RatingBand>,
}

impl Default for RatingBands {
    fn default() -> Self {
        Self::standard()
    }
}

impl RatingBands {
    pub fn new(floor_label: &str, bands: &[(f64, &str)]) -> Self {
        Self {
            floor_label: floor_label.to_string(),
            bands: bands
                .iter()
                .map(|(threshold_tons, label)| RatingBand {
                    threshold_tons: *threshold_tons,
                    label: label.to_string(),
                })
                .collect(),
        }
    }

    /// B / A / AAA at 1 and 5 tonnes.
    pub fn standard() -> Self {
        Self::new(RATING_FLOOR_LABEL, &STANDARD_RATING_BANDS)
    }

    /// B / A / AA / AAA at 1, 3 and 10 tonnes.
    pub fn extended() -> Self {
        Self::new(RATING_FLOOR_LABEL, &EXTENDED_RATING_BANDS)
    }

    pub fn validate(&self) -> Result<(), String> {
        for band in &self.bands {
            if !band.threshold_tons.is_finite() {
                return Err(format!("rating threshold for '{}' is not finite", band.label));
            }
        }
        for pair in self.bands.windows(2) {
            if pair[1].threshold_tons <= pair[0].threshold_tons {
                return Err(format!(
                    "rating thresholds must ascend: '{}' at {} follows '{}' at {}",
                    pair[1].label, pair[1].threshold_tons, pair[0].label, pair[0].threshold_tons
                ));
            }
        }
        Ok(())
    }
}

impl RatingPolicy for RatingBands {
    fn rate(&self, co2_avoided_tons_year: f64) -> String {
        self.bands
            .iter()
            .rev()
            .find(|band| co2_avoided_tons_year >= band.threshold_tons)
            .map(|band| band.label.clone())
            .unwrap_or_else(|| self.floor_label.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EsgMetrics {
    pub diesel_avoided_liters_year: f64,
    pub co2_avoided_tons_year: f64,
    pub co2_avoided_kg_per_vehicle_year: f64,
    pub co2_avoided_g_per_km: f64,
    pub trees_equivalent: u64,
    pub esg_rating: String,
}

impl EsgMetrics {
    pub fn calculate(
        diesel_liters_year: f64,
        fleet_size: u32,
        km_total_year: f64,
        config: &EstimatorConfig,
        policy: &dyn RatingPolicy,
    ) -> Self {
        let _timing = logging::start_timing("EsgMetrics::calculate",
            OperationCategory::Estimation { stage: EstimationStage::Esg });

        let co2_avoided_tons_year = diesel_liters_year * config.diesel_kgco2_per_l / KG_PER_TON;
        let co2_avoided_kg_year = co2_avoided_tons_year * KG_PER_TON;

        let co2_avoided_kg_per_vehicle_year = if fleet_size > 0 {
            co2_avoided_kg_year / fleet_size as f64
        } else {
            0.0
        };
        let co2_avoided_g_per_km = if km_total_year > 0.0 {
            co2_avoided_kg_year * GRAMS_PER_KG / km_total_year
        } else {
            0.0
        };

        let trees_equivalent = trees_equivalent(co2_avoided_tons_year, config.trees_per_ton_co2);
        let esg_rating = policy.rate(co2_avoided_tons_year);

        tracing::debug!(co2_avoided_tons_year, trees_equivalent, esg_rating = %esg_rating, "esg metrics calculated");

        Self {
            diesel_avoided_liters_year: diesel_liters_year,
            co2_avoided_tons_year,
            co2_avoided_kg_per_vehicle_year,
            co2_avoided_g_per_km,
            trees_equivalent,
            esg_rating,
        }
    }
}

/// Truncates toward zero, never rounds.
pub fn trees_equivalent(co2_avoided_tons_year: f64, trees_per_ton_co2: f64) -> u64 {
    (co2_avoided_tons_year * trees_per_ton_co2).trunc() as u64
}
