use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::estimator_config::EstimatorConfig;
use crate::utils::logging::{self, EstimationStage, OperationCategory};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    #[serde(rename = "GO")]
    Go,
    #[serde(rename = "NO-GO")]
    NoGo,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Go => "GO",
            Decision::NoGo => "NO-GO",
        }
    }

    pub fn is_go(&self) -> bool {
        *self == Decision::Go
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Yearly running cost of the diesel baseline against the electric fleet, and the verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Economics {
    pub diesel_liters_year: f64,
    pub diesel_cost_year_eur: f64,
    pub ev_energy_cost_year_eur: f64,
    pub delta_fossil_year_eur: f64,    // Positive when the EV fleet is cheaper to run
    #[serde(with = "payback_format")]
    pub payback_years_hw_only: f64,    // +inf when there is no yearly saving, written as "inf"
    pub decision: Decision,
}

impl Economics {
    pub fn evaluate(km_total_year: f64, kwh_total_year: f64, capex_eur: f64, config: &EstimatorConfig) -> Self {
        let _timing = logging::start_timing("Economics::evaluate",
            OperationCategory::Estimation { stage: EstimationStage::Economics });

        let diesel_liters_year = diesel_liters(km_total_year, config.diesel_km_per_l);
        let diesel_cost_year_eur = diesel_liters_year * config.diesel_eur_per_l;
        let ev_energy_cost_year_eur = kwh_total_year * config.energy_internal_eur_per_kwh;
        let delta_fossil_year_eur = diesel_cost_year_eur - ev_energy_cost_year_eur;

        let payback_years_hw_only = payback_years(capex_eur, delta_fossil_year_eur);
        let decision = decide(delta_fossil_year_eur, payback_years_hw_only, config.payback_threshold_years);

        tracing::debug!(
            diesel_cost_year_eur,
            ev_energy_cost_year_eur,
            delta_fossil_year_eur,
            payback_years_hw_only,
            "economics evaluated"
        );

        Self {
            diesel_liters_year,
            diesel_cost_year_eur,
            ev_energy_cost_year_eur,
            delta_fossil_year_eur,
            payback_years_hw_only,
            decision,
        }
    }

    pub fn has_payback(&self) -> bool {
        self.payback_years_hw_only.is_finite()
    }
}

/// JSON has no infinity, so a missing payback is written as the string `"inf"`,
/// the same token the CSV export uses.
mod payback_format {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const NO_PAYBACK: &str = "inf";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Years(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(payback_years: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if payback_years.is_finite() {
            serializer.serialize_f64(*payback_years)
        } else {
            serializer.serialize_str(NO_PAYBACK)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Years(years) => Ok(years),
            Repr::Text(text) if text == NO_PAYBACK => Ok(f64::INFINITY),
            Repr::Text(text) => Err(D::Error::custom(format!("invalid payback '{}'", text))),
        }
    }
}

pub fn diesel_liters(km_total_year: f64, diesel_km_per_l: f64) -> f64 {
    if diesel_km_per_l > 0.0 {
        km_total_year / diesel_km_per_l
    } else {
        0.0
    }
}

pub fn payback_years(capex_eur: f64, delta_fossil_year_eur: f64) -> f64 {
    if delta_fossil_year_eur > 0.0 {
        capex_eur / delta_fossil_year_eur
    } else {
        f64::INFINITY
    }
}

pub fn decide(delta_fossil_year_eur: f64, payback_years: f64, threshold_years: f64) -> Decision {
    if delta_fossil_year_eur > 0.0 && payback_years <= threshold_years {
        Decision::Go
    } else {
        Decision::NoGo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payback_is_capex_over_saving() {
        assert_eq!(payback_years(18_600.0, 9_300.0), 2.0);
        assert_eq!(payback_years(0.0, 1.0), 0.0);
    }

    #[test]
    fn no_saving_means_infinite_payback() {
        assert_eq!(payback_years(18_600.0, 0.0), f64::INFINITY);
        assert_eq!(payback_years(18_600.0, -250.0), f64::INFINITY);
        assert_eq!(payback_years(0.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn decision_boundaries() {
        assert_eq!(decide(1_000.0, 4.0, 4.0), Decision::Go);
        assert_eq!(decide(1_000.0, 4.01, 4.0), Decision::NoGo);
        assert_eq!(decide(0.0, 0.0, 4.0), Decision::NoGo);
        assert_eq!(decide(-1.0, f64::INFINITY, 4.0), Decision::NoGo);
    }

    #[test]
    fn zero_diesel_economy_yields_no_baseline() {
        let config = EstimatorConfig { diesel_km_per_l: 0.0, ..EstimatorConfig::default() };
        let economics = Economics::evaluate(330_000.0, 72_600.0, 18_600.0, &config);

        assert_eq!(economics.diesel_liters_year, 0.0);
        assert_eq!(economics.diesel_cost_year_eur, 0.0);
        assert!(economics.delta_fossil_year_eur < 0.0);
        assert!(!economics.has_payback());
        assert_eq!(economics.decision, Decision::NoGo);
    }

    #[test]
    fn saving_with_slow_payback_is_no_go() {
        // Saving of 1000 EUR/yr against 4010 EUR capex
        let config = EstimatorConfig {
            diesel_km_per_l: 10.0,
            diesel_eur_per_l: 1.0,
            energy_internal_eur_per_kwh: 0.0,
            ..EstimatorConfig::default()
        };

        let slow = Economics::evaluate(10_000.0, 2_200.0, 4_010.0, &config);
        assert_eq!(slow.delta_fossil_year_eur, 1_000.0);
        assert!((slow.payback_years_hw_only - 4.01).abs() < 1e-12);
        assert_eq!(slow.decision, Decision::NoGo);

        let exact = Economics::evaluate(10_000.0, 2_200.0, 4_000.0, &config);
        assert_eq!(exact.payback_years_hw_only, 4.0);
        assert_eq!(exact.decision, Decision::Go);
    }

    #[test]
    fn missing_payback_survives_json() {
        let config = EstimatorConfig::default();
        let none = Economics::evaluate(0.0, 0.0, 3_100.0, &config);

        let json = serde_json::to_value(&none).unwrap();
        assert_eq!(json["payback_years_hw_only"], "inf");
        let back: Economics = serde_json::from_value(json).unwrap();
        assert_eq!(back, none);

        let some = Economics::evaluate(330_000.0, 72_600.0, 18_600.0, &config);
        let json = serde_json::to_value(&some).unwrap();
        assert_eq!(serde_json::from_value::<Economics>(json).unwrap(), some);

        let mut garbled = serde_json::to_value(&some).unwrap();
        garbled["payback_years_hw_only"] = serde_json::Value::from("never");
        assert!(serde_json::from_value::<Economics>(garbled).is_err());
    }

    #[test]
    fn decision_serializes_as_label() {
        assert_eq!(serde_json::to_string(&Decision::NoGo).unwrap(), "\"NO-GO\"");
        assert_eq!(Decision::Go.to_string(), "GO");
    }
}
