// Module declarations for the fleet electrification estimator

// Estimation engine and batch driver
pub mod core {
    pub mod estimator;
    pub mod batch;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod estimator_config;
}

// Engine stages
pub mod models {
    pub mod demand;
    pub mod charger_tier;
    pub mod sizing;
    pub mod economics;
    pub mod esg;
}

// Data loaders
pub mod data {
    pub mod fleet_loader;
}

// Console reporting
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
    pub mod traits;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::core::estimator::{estimate, estimate_with_policy, EstimateResult, FleetRequest};
pub use crate::config::estimator_config::{ConfigPreset, EstimatorConfig};
pub use crate::models::economics::Decision;
pub use crate::utils::traits::RatingPolicy;
