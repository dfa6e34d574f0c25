use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Wire format for the `start_time` and `end_time` columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column order of the dataset CSV.
pub const CSV_HEADER: [&str; 10] = [
    "rental_id",
    "user_id",
    "age",
    "gender",
    "start_time",
    "end_time",
    "start_station",
    "end_station",
    "duration_minutes",
    "price",
];

/// Flat fare charged on every rental.
pub const BASE_FARE: f64 = 2.5;

/// Per-minute fare component.
pub const MINUTE_RATE: f64 = 0.1;

/// Docking stations of the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    #[serde(rename = "Station A")]
    A,
    #[serde(rename = "Station B")]
    B,
    #[serde(rename = "Station C")]
    C,
    #[serde(rename = "Station D")]
    D,
    #[serde(rename = "Station E")]
    E,
}

impl Station {
    /// Every station, in display order.
    pub const ALL: [Station; 5] = [Station::A, Station::B, Station::C, Station::D, Station::E];

    fn letter(&self) -> &'static str {
        match self {
            Station::A => "A",
            Station::B => "B",
            Station::C => "C",
            Station::D => "D",
            Station::E => "E",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station {}", self.letter())
    }
}

impl FromStr for Station {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "Station A" => Ok(Station::A),
            "Station B" => Ok(Station::B),
            "Station C" => Ok(Station::C),
            "Station D" => Ok(Station::D),
            "Station E" => Ok(Station::E),
            other => Err(Error::InvalidRecord(format!("unknown station '{other}'"))),
        }
    }
}

/// Rider gender as recorded on the rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Every gender value, in display order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(Error::InvalidRecord(format!("unknown gender '{other}'"))),
        }
    }
}

/// One row of the rental dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    pub rental_id: u64,
    pub user_id: u32,
    pub age: u32,
    pub gender: Gender,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: Station,
    pub end_station: Station,
    pub duration_minutes: i64,
    pub price: f64,
}

impl RentalRecord {
    /// Hour of day the rental started, 0-23.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Fare for a rental of the given duration, rounded to cents.
pub fn price_for_duration(duration_minutes: i64) -> f64 {
    round2(BASE_FARE + duration_minutes as f64 * MINUTE_RATE)
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
