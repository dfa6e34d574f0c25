use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::record::{RentalRecord, price_for_duration};

/// Tolerance when comparing prices parsed from 2-decimal text.
const PRICE_EPSILON: f64 = 1e-9;

/// Structured invariant violation found in a loaded relation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub row_index: u64,
    pub message: String,
}

/// Verify the dataset invariants over `records`.
///
/// This checks:
/// - `rental_id` forms a dense 1..N sequence
/// - `end_time - start_time` equals `duration_minutes` exactly
/// - `price` matches the fare formula
pub fn validate_records(records: &[RentalRecord]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u64 + 1;

        if record.rental_id != row {
            violations.push(Violation {
                code: "rental_id_sequence".to_string(),
                row_index: row,
                message: format!("expected rental_id {row}, found {}", record.rental_id),
            });
        }

        if record.end_time - record.start_time != Duration::minutes(record.duration_minutes) {
            violations.push(Violation {
                code: "end_time_drift".to_string(),
                row_index: row,
                message: format!(
                    "end_time is not start_time + {} minute(s)",
                    record.duration_minutes
                ),
            });
        }

        let expected = price_for_duration(record.duration_minutes);
        if (record.price - expected).abs() > PRICE_EPSILON {
            violations.push(Violation {
                code: "price_formula".to_string(),
                row_index: row,
                message: format!("expected price {expected:.2}, found {:.2}", record.price),
            });
        }
    }

    violations
}
