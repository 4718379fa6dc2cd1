use std::fs::File;
use std::io::Read;
use std::path::Path;
use csv::ReaderBuilder;
use serde::Deserialize;

use crate::core::estimator::FleetRequest;
use crate::utils::logging::{self, FileIOType, OperationCategory};

#[derive(Debug)]
pub enum FleetLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    InvalidRow { line: u64, reason: String },
}

impl From<std::io::Error> for FleetLoadError {
    fn from(err: std::io::Error) -> Self {
        FleetLoadError::IoError(err)
    }
}

impl From<csv::Error> for FleetLoadError {
    fn from(err: csv::Error) -> Self {
        FleetLoadError::CsvError(err)
    }
}

impl std::fmt::Display for FleetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FleetLoadError::IoError(e) => write!(f, "IO error: {}", e),
            FleetLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            FleetLoadError::InvalidRow { line, reason } => write!(f, "Invalid fleet on line {}: {}", line, reason),
        }
    }
}

impl std::error::Error for FleetLoadError {}

#[derive(Debug, Deserialize)]
struct FleetRow {
    label: String,
    fleet_size: u32,
    km_per_vehicle_year: f64,
}

/// One named fleet of a batch file.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetRecord {
    pub label: String,
    pub request: FleetRequest,
}

pub fn load_fleets(path: impl AsRef<Path>) -> Result<Vec<FleetRecord>, FleetLoadError> {
    let _timing = logging::start_timing("load_fleets",
        OperationCategory::FileIO { subcategory: FileIOType::FleetLoad });

    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let fleets = parse_fleets(&contents)?;
    tracing::info!(count = fleets.len(), path = %path.as_ref().display(), "loaded fleets");
    Ok(fleets)
}

/// Parses `label,fleet_size,km_per_vehicle_year` rows, validating each into a request.
pub fn parse_fleets(contents: &str) -> Result<Vec<FleetRecord>, FleetLoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut fleets = Vec::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        let row: FleetRow = record.deserialize(Some(&headers))?;

        let request = FleetRequest::new(row.fleet_size, row.km_per_vehicle_year)
            .map_err(|e| FleetLoadError::InvalidRow { line, reason: e.to_string() })?;

        let label = if row.label.is_empty() {
            format!("fleet_{}", fleets.len() + 1)
        } else {
            row.label
        };

        fleets.push(FleetRecord { label, request });
    }

    Ok(fleets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_in_order() {
        let contents = "label,fleet_size,km_per_vehicle_year\n\
                        vans, 11, 30000\n\
                        ,8,20000.5\n";
        let fleets = parse_fleets(contents).unwrap();

        assert_eq!(fleets.len(), 2);
        assert_eq!(fleets[0].label, "vans");
        assert_eq!(fleets[0].request.fleet_size(), 11);
        assert_eq!(fleets[1].label, "fleet_2");
        assert_eq!(fleets[1].request.km_per_vehicle_year(), 20_000.5);
    }

    #[test]
    fn rejects_empty_fleet() {
        let contents = "label,fleet_size,km_per_vehicle_year\nghost,0,1000\n";
        match parse_fleets(contents) {
            Err(FleetLoadError::InvalidRow { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("at least 1"));
            }
            other => panic!("expected invalid row, got {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_numbers() {
        let contents = "label,fleet_size,km_per_vehicle_year\nvans,eleven,30000\n";
        assert!(matches!(parse_fleets(contents), Err(FleetLoadError::CsvError(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_fleets("/nonexistent/fleets.csv"),
            Err(FleetLoadError::IoError(_))
        ));
    }
}
