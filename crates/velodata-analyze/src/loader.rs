use std::path::Path;

use chrono::NaiveDateTime;

use velodata_core::{CSV_HEADER, RentalRecord, TIMESTAMP_FORMAT};

use crate::errors::AnalyzeError;

/// Load the full relation from `path`.
///
/// Fails fast before any query runs: a missing file maps to
/// [`AnalyzeError::FileNotFound`], a header-only file to
/// [`AnalyzeError::EmptyDataset`], and any malformed header or field to
/// [`AnalyzeError::InvalidDataset`] with row context.
pub fn load_rentals(path: &Path) -> Result<Vec<RentalRecord>, AnalyzeError> {
    if !path.exists() {
        return Err(AnalyzeError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers != CSV_HEADER {
        return Err(AnalyzeError::InvalidDataset(format!(
            "unexpected header: expected '{}', found '{}'",
            CSV_HEADER.join(","),
            headers.join(",")
        )));
    }

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx as u64 + 1;
        let record = result?;
        records.push(parse_record(&record, row)?);
    }

    if records.is_empty() {
        return Err(AnalyzeError::EmptyDataset(path.to_path_buf()));
    }

    Ok(records)
}

fn parse_record(record: &csv::StringRecord, row: u64) -> Result<RentalRecord, AnalyzeError> {
    Ok(RentalRecord {
        rental_id: parse_field(record, 0, row, |v| v.parse().ok())?,
        user_id: parse_field(record, 1, row, |v| v.parse().ok())?,
        age: parse_field(record, 2, row, |v| v.parse().ok())?,
        gender: parse_field(record, 3, row, |v| v.parse().ok())?,
        start_time: parse_field(record, 4, row, parse_timestamp)?,
        end_time: parse_field(record, 5, row, parse_timestamp)?,
        start_station: parse_field(record, 6, row, |v| v.parse().ok())?,
        end_station: parse_field(record, 7, row, |v| v.parse().ok())?,
        duration_minutes: parse_field(record, 8, row, |v| v.parse().ok())?,
        price: parse_field(record, 9, row, |v| v.parse().ok())?,
    })
}

fn parse_field<T>(
    record: &csv::StringRecord,
    column: usize,
    row: u64,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, AnalyzeError> {
    let raw = record.get(column).unwrap_or_default();
    parse(raw.trim()).ok_or_else(|| {
        AnalyzeError::InvalidDataset(format!(
            "invalid value '{}' for column '{}' at row {}",
            raw, CSV_HEADER[column], row
        ))
    })
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}
