use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Destination CSV path; overwritten if it already exists.
    pub out_path: PathBuf,
    /// Number of records to generate.
    pub records: u64,
    /// Seed for the PRNG; drawn from entropy when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from("bike_sharing.csv"),
            records: 1000,
            seed: None,
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub dataset_version: String,
    /// Effective seed; echoes the option or records the entropy draw.
    pub seed: u64,
    pub records_requested: u64,
    pub records_written: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
