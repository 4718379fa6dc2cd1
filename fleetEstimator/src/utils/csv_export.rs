use std::fs;
use std::path::{Path, PathBuf};
use chrono::Local;
use serde::Serialize;

use crate::config::constants::RESULTS_FILE_NAME;
use crate::core::estimator::EstimateResult;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

/// Flat table row for one estimate. Infinite payback is written as `inf`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportRow {
    pub label: String,
    #[serde(rename = "N")]
    pub fleet_size: u32,
    pub km_per_vehicle_year: f64,
    pub km_total_year: f64,
    pub kwh_total_year: f64,
    pub kwh_total_day: f64,
    pub kwh_total_day_peak: f64,
    pub hardware: String,
    pub station_count: u32,
    pub capex_eur: f64,
    pub delta_fossil_year_eur: f64,
    pub payback_years_hw_only: f64,
    pub decision: String,
    pub co2_avoided_tons_year: f64,
    pub diesel_avoided_liters_year: f64,
    pub trees_equivalent: u64,
    pub esg_rating: String,
}

impl ExportRow {
    pub fn from_result(label: &str, result: &EstimateResult) -> Self {
        Self {
            label: label.to_string(),
            fleet_size: result.inputs.fleet_size,
            km_per_vehicle_year: result.inputs.km_per_vehicle_year,
            km_total_year: result.inputs.km_total_year,
            kwh_total_year: result.energy.kwh_total_year,
            kwh_total_day: result.energy.kwh_total_day,
            kwh_total_day_peak: result.energy.kwh_total_day_peak,
            hardware: result.sizing.hardware.clone(),
            station_count: result.sizing.station_count,
            capex_eur: result.capex.capex_eur,
            delta_fossil_year_eur: result.economics.delta_fossil_year_eur,
            payback_years_hw_only: result.economics.payback_years_hw_only,
            decision: result.economics.decision.label().to_string(),
            co2_avoided_tons_year: result.esg.co2_avoided_tons_year,
            diesel_avoided_liters_year: result.esg.diesel_avoided_liters_year,
            trees_equivalent: result.esg.trees_equivalent,
            esg_rating: result.esg.esg_rating.clone(),
        }
    }
}

/// Writes estimate rows into a timestamped run directory.
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    /// Creates `<output_dir>/<YYYYmmdd_HHMMSS>/`.
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self, ExportError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        Self::with_run_dir(output_dir.as_ref().join(timestamp))
    }

    /// Writes directly into `run_dir`, creating it if needed.
    pub fn with_run_dir(run_dir: impl AsRef<Path>) -> Result<Self, ExportError> {
        let output_dir = run_dir.as_ref().to_path_buf();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn export_results<'a, I>(&self, results: I) -> Result<PathBuf, ExportError>
    where
        I: IntoIterator<Item = (&'a str, &'a EstimateResult)>,
    {
        let _timing = logging::start_timing("CsvExporter::export_results",
            OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

        let path = self.output_dir.join(RESULTS_FILE_NAME);
        let mut writer = csv::Writer::from_path(&path)?;

        let mut rows = 0usize;
        for (label, result) in results {
            writer.serialize(ExportRow::from_result(label, result))?;
            rows += 1;
        }
        writer.flush()?;

        tracing::info!(rows, path = %path.display(), "exported results");
        Ok(path)
    }
}
