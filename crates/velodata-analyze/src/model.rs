use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use velodata_core::{RentalRecord, Violation};

use crate::queries::{
    AgeBucketCount, CategoryPricing, GenderCount, HourCount, HourSample, LongRental, RouteRevenue,
    StationCount, StationDeparture, StationDuration,
};

/// Options for the analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeOptions {
    /// Input dataset CSV path.
    pub input: PathBuf,
    /// Rows shown in the dataset preview.
    pub preview_rows: usize,
    /// Optional directory for report artifacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<PathBuf>,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from("bike_sharing.csv"),
            preview_rows: 5,
            out_dir: None,
        }
    }
}

/// Typed results of the full query catalogue over one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub run_id: String,
    pub dataset_version: String,
    pub input: PathBuf,
    pub total_records: u64,
    pub violations: Vec<Violation>,
    pub preview: Vec<RentalRecord>,
    pub long_rentals: Vec<LongRental>,
    pub station_a_departures: Vec<StationDeparture>,
    pub total_revenue: f64,
    pub rentals_per_station: Vec<StationCount>,
    pub avg_duration_per_station: Vec<StationDuration>,
    pub top_station: Option<StationCount>,
    pub hour_samples: Vec<HourSample>,
    pub rentals_per_hour: Vec<HourCount>,
    pub peak_hours: Vec<HourCount>,
    pub peak_morning_station: Option<StationCount>,
    pub average_age: f64,
    pub rentals_by_gender: Vec<GenderCount>,
    pub rentals_by_age_bucket: Vec<AgeBucketCount>,
    pub most_profitable_routes: Vec<RouteRevenue>,
    pub price_by_duration_category: Vec<CategoryPricing>,
    pub duration_ms: u64,
}

/// Result of an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub report: AnalysisReport,
    pub rendered: String,
    pub report_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}
