// Operating window
pub const DEFAULT_CHARGING_WINDOW_HOURS: f64 = 10.0;        // 09:00-19:00 depot window

// Rotation (vehicles fully served per station per day)
pub const DEFAULT_AC_ROTATION: u32 = 2;
pub const DEFAULT_DC_ROTATION: u32 = 6;

// Effective Power Ratings (kW)
pub const DEFAULT_AC_POWER_EFFECTIVE_KW: f64 = 11.0;        // AC 22kW unit, limited to 11kW on board
pub const DEFAULT_DC30_POWER_KW: f64 = 30.0;
pub const DEFAULT_DC60_POWER_KW: f64 = 60.0;

// Hardware Costs (in euros, acquisition + installation)
pub const DEFAULT_AC22_ACQUISITION_EUR: f64 = 1_500.0;
pub const DEFAULT_AC22_INSTALLATION_EUR: f64 = 1_600.0;
pub const DEFAULT_DC30_ACQUISITION_EUR: f64 = 8_500.0;
pub const DEFAULT_DC30_INSTALLATION_EUR: f64 = 7_500.0;
pub const DEFAULT_DC60_ACQUISITION_EUR: f64 = 16_000.0;
pub const DEFAULT_DC60_INSTALLATION_EUR: f64 = 7_500.0;

// Vehicle and Energy
pub const DEFAULT_EV_KWH_PER_KM: f64 = 0.22;
pub const DEFAULT_ENERGY_INTERNAL_EUR_PER_KWH: f64 = 0.22;

// Diesel Baseline
pub const DEFAULT_DIESEL_KM_PER_L: f64 = 15.0;
pub const DEFAULT_DIESEL_EUR_PER_L: f64 = 1.75;
pub const DEFAULT_DIESEL_KGCO2_PER_L: f64 = 2.65;

// ESG
pub const DEFAULT_TREES_PER_TON_CO2: f64 = 50.0;
pub const KG_PER_TON: f64 = 1_000.0;
pub const GRAMS_PER_KG: f64 = 1_000.0;

// Economic Gate
pub const DEFAULT_PAYBACK_THRESHOLD_YEARS: f64 = 4.0;

// Demand Profile
pub const CALENDAR_DAYS_PER_YEAR: f64 = 365.0;
pub const DEFAULT_WORKING_DAYS_PER_YEAR: f64 = 240.0;      // Used by the working-day presets
pub const NO_PEAK_FACTOR: f64 = 1.0;
pub const DEFAULT_PEAK_FACTOR: f64 = 1.25;                 // Used by the peak-aware preset

// Hardware Tier Policy (kWh per vehicle per day)
// AC at 11kW effective over the window with rotation 2 delivers ~55 kWh per vehicle
pub const DC_REQUIRED_KWH_PER_VEHICLE_DAY: f64 = 55.0;
pub const DC60_REQUIRED_KWH_PER_VEHICLE_DAY: f64 = 90.0;

// ESG Rating Bands (tonnes CO2 avoided per year)
pub const RATING_FLOOR_LABEL: &str = "B";
pub const STANDARD_RATING_BANDS: [(f64, &str); 2] = [(1.0, "A"), (5.0, "AAA")];
pub const EXTENDED_RATING_BANDS: [(f64, &str); 3] = [(1.0, "A"), (3.0, "AA"), (10.0, "AAA")];

// Hardware Labels
pub const AC22_LABEL: &str = "AC 22kW (eff. 11kW)";
pub const DC30_LABEL: &str = "DC 30kW";
pub const DC60_LABEL: &str = "DC 60kW";

// Export
pub const RESULTS_FILE_NAME: &str = "ev_go_nogo_results.csv";
