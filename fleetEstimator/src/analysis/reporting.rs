use crate::core::estimator::EstimateResult;
use crate::models::economics::Economics;
use crate::models::sizing::BindingConstraint;

pub fn format_payback(economics: &Economics) -> String {
    if economics.has_payback() {
        format!("{:.2} years", economics.payback_years_hw_only)
    } else {
        "∞ (no payback)".to_string()
    }
}

/// Thousands-separated whole euros, e.g. `€ 18,600`.
pub fn format_eur(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("€ -{}", grouped)
    } else {
        format!("€ {}", grouped)
    }
}

pub fn decision_banner(result: &EstimateResult) -> &'static str {
    if result.economics.decision.is_go() {
        "GO - investment pays back within the threshold"
    } else {
        "NO-GO - payback above threshold or no yearly saving"
    }
}

pub fn print_estimate_summary(label: &str, result: &EstimateResult) {
    println!("\nFleet {} ({} vehicles, {:.0} km/vehicle/year)", label, result.inputs.fleet_size, result.inputs.km_per_vehicle_year);
    println!("----------------------------------------");
    println!("{}", decision_banner(result));
    println!("Hardware: {}", result.sizing.hardware);
    println!("CAPEX: {}", format_eur(result.capex.capex_eur));
    println!("Payback (hardware only): {}", format_payback(&result.economics));
    println!("Energy cost delta vs diesel: {}/year", format_eur(result.economics.delta_fossil_year_eur));
    println!("ESG Metrics:");
    println!("  CO2 avoided: {:.2} t/year", result.esg.co2_avoided_tons_year);
    println!("  Diesel avoided: {:.0} L/year", result.esg.diesel_avoided_liters_year);
    println!("  Trees equivalent: {}", result.esg.trees_equivalent);
    println!("  Rating: {}", result.esg.esg_rating);
}

pub fn print_sizing_details(result: &EstimateResult) {
    let sizing = &result.sizing;
    let binding = match sizing.binding_constraint {
        BindingConstraint::Rotation => "rotation",
        BindingConstraint::Energy => "energy",
        BindingConstraint::Both => "rotation and energy",
    };

    println!("\nSizing Details:");
    println!("----------------------------------------");
    println!("  Energy per vehicle: {:.2} kWh/day", result.energy.kwh_per_vehicle_day);
    println!("  Fleet energy: {:.2} kWh/day (sizing on {:.2} kWh/day)", result.energy.kwh_total_day, result.energy.kwh_total_day_peak);
    println!("  Station capacity: {:.1} kWh/day", sizing.kwh_per_station_day);
    println!("  Stations by rotation: {}", sizing.stations_by_rotation);
    println!("  Stations by energy: {}", sizing.stations_by_energy);
    println!("  Stations: {} (bound by {})", sizing.station_count, binding);
    println!("----------------------------------------");
}
