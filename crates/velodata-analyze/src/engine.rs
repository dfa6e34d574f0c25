use std::time::Instant;

use tracing::{info, warn};
use uuid::Uuid;

use velodata_core::{DATASET_VERSION, Station, validate_records};

use crate::errors::AnalyzeError;
use crate::loader::load_rentals;
use crate::model::{AnalysisReport, AnalysisResult, AnalyzeOptions};
use crate::queries;
use crate::report::render_report;

/// Rows kept by the hour-extraction sample.
const HOUR_SAMPLE_ROWS: usize = 10;
/// Number of peak hours reported.
const PEAK_HOUR_LIMIT: usize = 3;
/// Number of routes in the revenue ranking.
const ROUTE_LIMIT: usize = 5;

/// Runs the fixed query battery over a dataset file.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    options: AnalyzeOptions,
}

impl AnalysisEngine {
    pub fn new(options: AnalyzeOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<AnalysisResult, AnalyzeError> {
        let start = Instant::now();
        let run_id = Uuid::new_v4().to_string();

        info!(
            run_id = %run_id,
            input = %self.options.input.display(),
            "analysis started"
        );

        let records = load_rentals(&self.options.input)?;
        info!(run_id = %run_id, records = records.len(), "dataset loaded");

        let violations = validate_records(&records);
        if !violations.is_empty() {
            warn!(
                run_id = %run_id,
                violations = violations.len(),
                "dataset invariant violations detected"
            );
        }

        let preview = records
            .iter()
            .take(self.options.preview_rows)
            .cloned()
            .collect();
        let hour_samples = queries::hour_extraction(&records)
            .into_iter()
            .take(HOUR_SAMPLE_ROWS)
            .collect();

        let report = AnalysisReport {
            run_id: run_id.clone(),
            dataset_version: DATASET_VERSION.to_string(),
            input: self.options.input.clone(),
            total_records: records.len() as u64,
            violations,
            preview,
            long_rentals: queries::long_rentals(&records),
            station_a_departures: queries::station_departures(&records, Station::A),
            total_revenue: queries::total_revenue(&records),
            rentals_per_station: queries::rentals_per_station(&records),
            avg_duration_per_station: queries::avg_duration_per_station(&records),
            top_station: queries::top_station(&records),
            hour_samples,
            rentals_per_hour: queries::rentals_per_hour(&records),
            peak_hours: queries::peak_hours(&records, PEAK_HOUR_LIMIT),
            peak_morning_station: queries::peak_morning_station(&records),
            average_age: queries::average_age(&records),
            rentals_by_gender: queries::rentals_by_gender(&records),
            rentals_by_age_bucket: queries::rentals_by_age_bucket(&records),
            most_profitable_routes: queries::most_profitable_routes(&records, ROUTE_LIMIT),
            price_by_duration_category: queries::price_by_duration_category(&records),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        let rendered = render_report(&report);

        let (report_path, json_path) = match &self.options.out_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)?;
                let report_path = dir.join("report.md");
                std::fs::write(&report_path, rendered.as_bytes())?;
                let json_path = dir.join("analysis.json");
                std::fs::write(&json_path, serde_json::to_vec_pretty(&report)?)?;
                (Some(report_path), Some(json_path))
            }
            None => (None, None),
        };

        info!(
            run_id = %run_id,
            duration_ms = report.duration_ms,
            "analysis completed"
        );

        Ok(AnalysisResult {
            report,
            rendered,
            report_path,
            json_path,
        })
    }
}
