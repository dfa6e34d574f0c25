use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the analysis engine.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The input CSV does not exist.
    #[error("dataset not found: {} (run `velodata generate` first)", .0.display())]
    FileNotFound(PathBuf),
    /// The input CSV has a header but zero data rows.
    #[error("dataset is empty: {} (run `velodata generate` first)", .0.display())]
    EmptyDataset(PathBuf),
    /// The input CSV exists but does not conform to the dataset schema.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
