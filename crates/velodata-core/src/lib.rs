//! Core contracts and helpers for Velodata.
//!
//! This crate defines the rental record model, the station and gender
//! vocabularies, the bucketing rules shared by every analysis query, and
//! the invariant checks used by the analyzer and the test suites.

pub mod buckets;
pub mod error;
pub mod record;
pub mod validation;

pub use buckets::{AgeBucket, DurationCategory};
pub use error::{Error, Result};
pub use record::{
    BASE_FARE, CSV_HEADER, Gender, MINUTE_RATE, RentalRecord, Station, TIMESTAMP_FORMAT,
    price_for_duration, round2,
};
pub use validation::{Violation, validate_records};

/// Current dataset contract version for generated CSV artifacts.
pub const DATASET_VERSION: &str = "0.1";
