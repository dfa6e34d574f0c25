use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use velodata_core::{DATASET_VERSION, Gender, RentalRecord, Station, price_for_duration};

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::write_rentals_csv;

/// Entry point for producing a synthetic rental dataset.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationReport, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let seed = self.options.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        info!(
            run_id = %run_id,
            records = self.options.records,
            seed,
            path = %self.options.out_path.display(),
            "generation started"
        );

        let mut records = Vec::with_capacity(self.options.records as usize);
        for rental_id in 1..=self.options.records {
            records.push(random_record(rental_id, &mut rng));
        }

        let bytes_written = write_rentals_csv(&self.options.out_path, &records)?;

        let report = GenerationReport {
            run_id: run_id.clone(),
            dataset_version: DATASET_VERSION.to_string(),
            seed,
            records_requested: self.options.records,
            records_written: records.len() as u64,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            run_id = %run_id,
            records_written = report.records_written,
            bytes_written = report.bytes_written,
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(report)
    }
}

fn random_record(rental_id: u64, rng: &mut ChaCha8Rng) -> RentalRecord {
    let start_time = random_start_time(rng);
    let duration_minutes = rng.random_range(5..=125);

    RentalRecord {
        rental_id,
        user_id: rng.random_range(1..=500),
        age: rng.random_range(18..=80),
        gender: Gender::ALL[rng.random_range(0..Gender::ALL.len())],
        start_time,
        end_time: start_time + Duration::minutes(duration_minutes),
        start_station: random_station(rng),
        end_station: random_station(rng),
        duration_minutes,
        price: price_for_duration(duration_minutes),
    }
}

/// Uniform timestamp within 2024; days capped at 28 so every month is valid.
fn random_start_time(rng: &mut ChaCha8Rng) -> NaiveDateTime {
    let month: u32 = rng.random_range(1..=12);
    let day: u32 = rng.random_range(1..=28);
    let hour: u32 = rng.random_range(0..24);
    let minute: u32 = rng.random_range(0..60);

    NaiveDate::from_ymd_opt(2024, month, day)
        .unwrap_or_default()
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn random_station(rng: &mut ChaCha8Rng) -> Station {
    Station::ALL[rng.random_range(0..Station::ALL.len())]
}
