use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "GO/NO-GO estimator for diesel-to-electric fleet conversion", long_about = None)]
pub struct Args {
    #[arg(short = 'n', long, help = "Number of vehicles in the fleet")]
    fleet_size: Option<u32>,

    #[arg(short = 'k', long, help = "Average yearly distance per vehicle (km)")]
    km_per_vehicle_year: Option<f64>,

    #[arg(short, long, default_value = "baseline", help = "baseline, working-days or peak-aware")]
    preset: String,

    #[arg(short, long, help = "JSON file whose fields override the preset")]
    config: Option<String>,

    #[arg(short, long, help = "CSV file with label,fleet_size,km_per_vehicle_year rows")]
    batch: Option<String>,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set, help = "Evaluate batch rows in parallel")]
    parallel: bool,

    #[arg(short, long, help = "Directory for timestamped CSV exports")]
    output_dir: Option<String>,

    #[arg(long, default_value_t = false, help = "Print results as JSON")]
    json: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn fleet_size(&self) -> Option<u32> {
        self.fleet_size
    }

    pub fn km_per_vehicle_year(&self) -> Option<f64> {
        self.km_per_vehicle_year
    }

    pub fn preset(&self) -> &str {
        &self.preset
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn batch(&self) -> Option<&str> {
        self.batch.as_deref()
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output_dir.as_deref()
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}
