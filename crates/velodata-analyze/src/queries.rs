//! The fixed query catalogue.
//!
//! Every query is a pure function over the loaded relation. Grouping goes
//! through a `HashMap` keyed by the derived value, so each bucket label is
//! computed once per record and grouping can never disagree with the
//! projection. Where a single top row is requested, rows with equal counts
//! keep the map's iteration order, which is unspecified.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::ops::RangeInclusive;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use velodata_core::{AgeBucket, DurationCategory, Gender, RentalRecord, Station, round2};

/// Hours counted as the morning window, inclusive.
const MORNING_HOURS: RangeInclusive<u32> = 7..=12;

/// A rental longer than the long-rental threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongRental {
    pub rental_id: u64,
    pub user_id: u32,
    pub start_station: Station,
    pub end_station: Station,
    pub duration_minutes: i64,
}

/// A rental departing from a given station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDeparture {
    pub rental_id: u64,
    pub user_id: u32,
    pub start_time: NaiveDateTime,
    pub end_station: Station,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationCount {
    pub station: Station,
    pub rentals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationDuration {
    pub station: Station,
    pub avg_duration_minutes: f64,
}

/// Hour-of-day projection of a single record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourSample {
    pub rental_id: u64,
    pub start_time: NaiveDateTime,
    pub hour: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub rentals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderCount {
    pub gender: Gender,
    pub rentals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBucketCount {
    pub bucket: AgeBucket,
    pub rentals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRevenue {
    pub start_station: Station,
    pub end_station: Station,
    pub trips: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPricing {
    pub category: DurationCategory,
    pub rentals: u64,
    pub avg_price: f64,
}

/// Rentals longer than 30 minutes, longest first.
pub fn long_rentals(records: &[RentalRecord]) -> Vec<LongRental> {
    let mut rows: Vec<LongRental> = records
        .iter()
        .filter(|record| record.duration_minutes > 30)
        .map(|record| LongRental {
            rental_id: record.rental_id,
            user_id: record.user_id,
            start_station: record.start_station,
            end_station: record.end_station,
            duration_minutes: record.duration_minutes,
        })
        .collect();
    rows.sort_by(|a, b| b.duration_minutes.cmp(&a.duration_minutes));
    rows
}

/// Rentals departing from `station`, in relation order.
///
/// A station with no departures yields an empty result set, not an error.
pub fn station_departures(records: &[RentalRecord], station: Station) -> Vec<StationDeparture> {
    records
        .iter()
        .filter(|record| record.start_station == station)
        .map(|record| StationDeparture {
            rental_id: record.rental_id,
            user_id: record.user_id,
            start_time: record.start_time,
            end_station: record.end_station,
            duration_minutes: record.duration_minutes,
        })
        .collect()
}

/// Sum of all prices, rounded once at the end.
pub fn total_revenue(records: &[RentalRecord]) -> f64 {
    round2(records.iter().map(|record| record.price).sum())
}

/// Rental count per start station, busiest first.
pub fn rentals_per_station(records: &[RentalRecord]) -> Vec<StationCount> {
    station_counts(records)
}

/// Mean rental duration per start station, longest first.
pub fn avg_duration_per_station(records: &[RentalRecord]) -> Vec<StationDuration> {
    let mut sums: HashMap<Station, (i64, u64)> = HashMap::new();
    for record in records {
        let entry = sums.entry(record.start_station).or_insert((0, 0));
        entry.0 += record.duration_minutes;
        entry.1 += 1;
    }

    let mut rows: Vec<StationDuration> = sums
        .into_iter()
        .map(|(station, (total, count))| StationDuration {
            station,
            avg_duration_minutes: round2(total as f64 / count as f64),
        })
        .collect();
    rows.sort_by(|a, b| descending_f64(a.avg_duration_minutes, b.avg_duration_minutes));
    rows
}

/// The single busiest start station.
pub fn top_station(records: &[RentalRecord]) -> Option<StationCount> {
    station_counts(records).into_iter().next()
}

/// Hour-of-day projection for every record.
pub fn hour_extraction(records: &[RentalRecord]) -> Vec<HourSample> {
    records
        .iter()
        .map(|record| HourSample {
            rental_id: record.rental_id,
            start_time: record.start_time,
            hour: record.start_hour(),
        })
        .collect()
}

/// Rental count per hour of day, midnight first.
pub fn rentals_per_hour(records: &[RentalRecord]) -> Vec<HourCount> {
    let mut counts: HashMap<u32, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.start_hour()).or_insert(0) += 1;
    }

    let mut rows: Vec<HourCount> = counts
        .into_iter()
        .map(|(hour, rentals)| HourCount { hour, rentals })
        .collect();
    rows.sort_by_key(|row| row.hour);
    rows
}

/// The `limit` hours with the highest counts; equal counts rank by hour.
pub fn peak_hours(records: &[RentalRecord], limit: usize) -> Vec<HourCount> {
    let mut rows = rentals_per_hour(records);
    rows.sort_by(|a, b| b.rentals.cmp(&a.rentals));
    rows.truncate(limit);
    rows
}

/// Busiest start station for departures between 07:00 and 12:59.
pub fn peak_morning_station(records: &[RentalRecord]) -> Option<StationCount> {
    station_counts(
        records
            .iter()
            .filter(|record| MORNING_HOURS.contains(&record.start_hour())),
    )
    .into_iter()
    .next()
}

/// Mean age over the whole relation, rounded to 2 decimals.
///
/// Callers guarantee a non-empty relation; the loader rejects empty input.
pub fn average_age(records: &[RentalRecord]) -> f64 {
    let total: f64 = records.iter().map(|record| record.age as f64).sum();
    round2(total / records.len() as f64)
}

/// Rental count per gender, largest first.
pub fn rentals_by_gender(records: &[RentalRecord]) -> Vec<GenderCount> {
    let mut counts: HashMap<Gender, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.gender).or_insert(0) += 1;
    }

    let mut rows: Vec<GenderCount> = counts
        .into_iter()
        .map(|(gender, rentals)| GenderCount { gender, rentals })
        .collect();
    rows.sort_by(|a, b| b.rentals.cmp(&a.rentals));
    rows
}

/// Rental count per age group, largest first.
pub fn rentals_by_age_bucket(records: &[RentalRecord]) -> Vec<AgeBucketCount> {
    let mut counts: HashMap<AgeBucket, u64> = HashMap::new();
    for record in records {
        *counts.entry(AgeBucket::for_age(record.age)).or_insert(0) += 1;
    }

    let mut rows: Vec<AgeBucketCount> = counts
        .into_iter()
        .map(|(bucket, rentals)| AgeBucketCount { bucket, rentals })
        .collect();
    rows.sort_by(|a, b| b.rentals.cmp(&a.rentals));
    rows
}

/// The `limit` routes with the highest summed revenue, richest first.
pub fn most_profitable_routes(records: &[RentalRecord], limit: usize) -> Vec<RouteRevenue> {
    let mut routes: HashMap<(Station, Station), (u64, f64)> = HashMap::new();
    for record in records {
        let entry = routes
            .entry((record.start_station, record.end_station))
            .or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.price;
    }

    let mut rows: Vec<RouteRevenue> = routes
        .into_iter()
        .map(|((start_station, end_station), (trips, total))| RouteRevenue {
            start_station,
            end_station,
            trips,
            revenue: round2(total),
        })
        .collect();
    rows.sort_by(|a, b| descending_f64(a.revenue, b.revenue));
    rows.truncate(limit);
    rows
}

/// Count and mean price per duration category, cheapest first.
pub fn price_by_duration_category(records: &[RentalRecord]) -> Vec<CategoryPricing> {
    let mut categories: HashMap<DurationCategory, (u64, f64)> = HashMap::new();
    for record in records {
        let entry = categories
            .entry(DurationCategory::for_duration(record.duration_minutes))
            .or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += record.price;
    }

    let mut rows: Vec<CategoryPricing> = categories
        .into_iter()
        .map(|(category, (rentals, total))| CategoryPricing {
            category,
            rentals,
            avg_price: round2(total / rentals as f64),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.avg_price
            .partial_cmp(&b.avg_price)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn station_counts<'a>(
    records: impl IntoIterator<Item = &'a RentalRecord>,
) -> Vec<StationCount> {
    let mut counts: HashMap<Station, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.start_station).or_insert(0) += 1;
    }

    let mut rows: Vec<StationCount> = counts
        .into_iter()
        .map(|(station, rentals)| StationCount { station, rentals })
        .collect();
    rows.sort_by(|a, b| b.rentals.cmp(&a.rentals));
    rows
}

fn descending_f64(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
