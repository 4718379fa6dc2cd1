use evfleet::config::estimator_config::{ConfigPreset, EstimatorConfig};
use evfleet::core::estimator::{estimate, estimate_with_policy, FleetRequest};
use evfleet::models::charger_tier::ChargerTier;
use evfleet::models::economics::Decision;
use evfleet::models::esg::RatingBands;
use evfleet::models::sizing::BindingConstraint;
use evfleet::RatingPolicy;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} within {}, got {}",
        expected,
        tolerance,
        actual
    );
}

#[test]
fn eleven_vehicles_thirty_thousand_km() {
    let result = estimate(&FleetRequest::new(11, 30_000.0).unwrap(), &EstimatorConfig::default());

    assert_close(result.energy.kwh_per_vehicle_day, 18.082, 1e-3);
    assert_close(result.energy.kwh_total_year, 72_600.0, 1e-6);

    assert_eq!(result.sizing.tier, ChargerTier::Ac22);
    assert_eq!(result.sizing.hardware, "AC 22kW (eff. 11kW)");
    assert_eq!(result.sizing.stations_by_rotation, 6);
    assert_eq!(result.sizing.stations_by_energy, 2);
    assert_eq!(result.sizing.station_count, 6);
    assert_eq!(result.sizing.binding_constraint, BindingConstraint::Rotation);
    assert_eq!(result.capex.capex_eur, 18_600.0);

    assert_close(result.economics.diesel_liters_year, 22_000.0, 1e-9);
    assert_close(result.economics.diesel_cost_year_eur, 38_500.0, 1e-6);
    assert_close(result.economics.ev_energy_cost_year_eur, 15_972.0, 1e-6);
    assert_close(result.economics.delta_fossil_year_eur, 22_528.0, 1e-6);
    assert_close(result.economics.payback_years_hw_only, 18_600.0 / 22_528.0, 1e-12);
    assert_eq!(result.economics.decision, Decision::Go);

    assert_close(result.esg.co2_avoided_tons_year, 58.3, 1e-9);
    assert_eq!(result.esg.trees_equivalent, 2915);
    assert_eq!(result.esg.esg_rating, "AAA");
}

#[test]
fn eight_vehicles_twenty_thousand_km() {
    let result = estimate(&FleetRequest::new(8, 20_000.0).unwrap(), &EstimatorConfig::default());

    assert_eq!(result.sizing.tier, ChargerTier::Ac22);
    assert_eq!(result.sizing.station_count, 4);
    assert_eq!(result.capex.capex_eur, 12_400.0);
    assert_eq!(result.economics.decision, Decision::Go);

    assert_close(result.esg.diesel_avoided_liters_year, 160_000.0 / 15.0, 1e-9);
    assert_close(result.esg.co2_avoided_tons_year, 160_000.0 / 15.0 * 2.65 / 1000.0, 1e-9);
    assert_eq!(result.esg.trees_equivalent, 1413);
}

#[test]
fn yearly_energy_scales_with_fleet_distance() {
    let config = EstimatorConfig::default();
    for fleet_size in [1u32, 2, 7, 19, 300] {
        for km in [0.0, 1.5, 9_999.0, 45_000.0, 150_000.0] {
            let result = estimate(&FleetRequest::new(fleet_size, km).unwrap(), &config);
            let expected = fleet_size as f64 * km * config.ev_kwh_per_km;
            assert_close(result.energy.kwh_total_year, expected, 1e-9 * expected.max(1.0));
        }
    }
}

#[test]
fn payback_above_threshold_is_no_go_despite_saving() {
    // 11 AC stations against a small distance: saving is positive but slow to recover
    let result = estimate(&FleetRequest::new(22, 1_000.0).unwrap(), &EstimatorConfig::default());

    assert!(result.economics.delta_fossil_year_eur > 0.0);
    assert!(result.economics.payback_years_hw_only > 4.0);
    assert_eq!(result.economics.decision, Decision::NoGo);
}

#[test]
fn expensive_electricity_is_no_go_with_infinite_payback() {
    let config = EstimatorConfig { energy_internal_eur_per_kwh: 0.60, ..EstimatorConfig::default() };
    let result = estimate(&FleetRequest::new(11, 30_000.0).unwrap(), &config);

    assert!(result.economics.delta_fossil_year_eur < 0.0);
    assert_eq!(result.economics.payback_years_hw_only, f64::INFINITY);
    assert_eq!(result.economics.decision, Decision::NoGo);
}

#[test]
fn payback_exactly_at_threshold_is_go() {
    // One AC station (3100 EUR) and a saving of exactly 775 EUR/yr
    let config = EstimatorConfig {
        ac_rotation: 10,
        diesel_km_per_l: 10.0,
        diesel_eur_per_l: 1.0,
        energy_internal_eur_per_kwh: 0.0,
        payback_threshold_years: 4.0,
        ..EstimatorConfig::default()
    };
    let at_threshold = estimate(&FleetRequest::new(1, 7_750.0).unwrap(), &config);
    assert_eq!(at_threshold.capex.capex_eur, 3_100.0);
    assert_eq!(at_threshold.economics.payback_years_hw_only, 4.0);
    assert_eq!(at_threshold.economics.decision, Decision::Go);

    let tighter = EstimatorConfig { payback_threshold_years: 3.99, ..config };
    let over = estimate(&FleetRequest::new(1, 7_750.0).unwrap(), &tighter);
    assert_eq!(over.economics.decision, Decision::NoGo);
}

#[test]
fn heavy_duty_fleet_uses_dc60() {
    // 500 km per vehicle per day on calendar days
    let result = estimate(&FleetRequest::new(12, 182_500.0).unwrap(), &EstimatorConfig::default());

    assert_eq!(result.sizing.tier, ChargerTier::Dc60);
    assert_eq!(result.sizing.stations_by_rotation, 2);
    assert_eq!(result.sizing.stations_by_energy, 3);
    assert_eq!(result.sizing.station_count, 3);
    assert_eq!(result.capex.capex_eur, 3.0 * 23_500.0);
}

#[test]
fn working_day_preset_raises_daily_demand() {
    let request = FleetRequest::new(10, 48_000.0).unwrap();
    let baseline = estimate(&request, &EstimatorConfig::from_preset(ConfigPreset::Baseline));
    let working = estimate(&request, &EstimatorConfig::from_preset(ConfigPreset::WorkingDays));

    assert_close(working.energy.kwh_per_vehicle_day, 44.0, 1e-9);
    assert!(working.energy.kwh_per_vehicle_day > baseline.energy.kwh_per_vehicle_day);
    assert_eq!(working.energy.kwh_total_year, baseline.energy.kwh_total_year);
    assert_eq!(working.economics, baseline.economics);
}

#[test]
fn working_days_can_cross_into_dc() {
    // 30000 km: 18 kWh/day over the calendar, 60 kWh/day over 110 working days
    let request = FleetRequest::new(6, 30_000.0).unwrap();
    let config = EstimatorConfig { working_days_per_year: 110.0, ..EstimatorConfig::default() };

    assert_eq!(estimate(&request, &EstimatorConfig::default()).sizing.tier, ChargerTier::Ac22);
    assert_eq!(estimate(&request, &config).sizing.tier, ChargerTier::Dc30);
}

#[test]
fn peak_aware_preset_sizes_on_peak_and_uses_extended_bands() {
    let config = EstimatorConfig {
        charging_window_hours: 2.0,
        ..EstimatorConfig::from_preset(ConfigPreset::PeakAware)
    };
    // 96 km/day over 240 days -> 21.12 kWh/vehicle, 211.2 kWh fleet, 264 kWh at peak
    let result = estimate(&FleetRequest::new(10, 23_040.0).unwrap(), &config);

    assert_close(result.energy.kwh_total_day, 211.2, 1e-9);
    assert_close(result.energy.kwh_total_day_peak, 264.0, 1e-9);
    assert_eq!(result.sizing.stations_by_energy, 12);
    assert_eq!(result.sizing.station_count, 12);
    assert_eq!(result.sizing.binding_constraint, BindingConstraint::Energy);

    // 15360 L diesel -> 40.7 t CO2
    assert_eq!(result.esg.esg_rating, "AAA");
    let small = estimate(&FleetRequest::new(1, 12_000.0).unwrap(), &config);
    assert_close(small.esg.co2_avoided_tons_year, 2.12, 1e-9);
    assert_eq!(small.esg.esg_rating, "A");
}

#[test]
fn custom_rating_policy_is_honoured() {
    struct Tiered;
    impl RatingPolicy for Tiered {
        fn rate(&self, co2_avoided_tons_year: f64) -> String {
            format!("{:.0}t", co2_avoided_tons_year.floor())
        }
    }

    let config = EstimatorConfig::default();
    let request = FleetRequest::new(11, 30_000.0).unwrap();
    let custom = estimate_with_policy(&request, &config, &Tiered);
    let banded = estimate_with_policy(&request, &config, &RatingBands::extended());

    assert_eq!(custom.esg.esg_rating, "58t");
    assert_eq!(banded.esg.esg_rating, "AAA");
    assert_eq!(custom.sizing, banded.sizing);
}

#[test]
fn result_serializes_with_labels_and_inf_for_no_payback() {
    let result = estimate(&FleetRequest::new(2, 0.0).unwrap(), &EstimatorConfig::default());
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["economics"]["decision"], "NO-GO");
    assert_eq!(json["economics"]["payback_years_hw_only"], "inf");
    assert_eq!(json["sizing"]["tier"], "Ac22");
    assert_eq!(json["capex"]["capex_eur"], 3_100.0);
    for group in ["inputs", "energy", "sizing", "capex", "economics", "esg"] {
        assert!(json.get(group).is_some(), "missing group {}", group);
    }
}

#[test]
fn json_output_reads_back_for_every_verdict() {
    let config = EstimatorConfig::default();
    for (fleet_size, km) in [(2u32, 0.0), (3, 0.0), (11, 30_000.0)] {
        let result = estimate(&FleetRequest::new(fleet_size, km).unwrap(), &config);
        let text = serde_json::to_string_pretty(&result).unwrap();
        let back: evfleet::EstimateResult = serde_json::from_str(&text).unwrap();

        assert_eq!(back.economics.decision, result.economics.decision);
        assert_eq!(back.economics.has_payback(), result.economics.has_payback());
        assert_eq!(back.sizing, result.sizing);
    }
}
