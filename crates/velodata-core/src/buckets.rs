//! Ordered bucketing rules for continuous fields.
//!
//! Each bucket is derived by walking a fixed rule table top to bottom and
//! taking the first matching range. The same table serves projection and
//! grouping, so the two cannot drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Age group of a rider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBucket {
    #[serde(rename = "18-30")]
    From18To30,
    #[serde(rename = "31-40")]
    From31To40,
    #[serde(rename = "41-50")]
    From41To50,
    #[serde(rename = "51+")]
    From51,
    Unknown,
}

/// Ordered `(min, max, bucket)` rules; a `None` max is open-ended.
const AGE_RULES: [(u32, Option<u32>, AgeBucket); 4] = [
    (18, Some(30), AgeBucket::From18To30),
    (31, Some(40), AgeBucket::From31To40),
    (41, Some(50), AgeBucket::From41To50),
    (51, None, AgeBucket::From51),
];

impl AgeBucket {
    /// First matching rule wins; ages below 18 fall through to `Unknown`.
    ///
    /// The generator never produces such ages, but a foreign dataset can.
    pub fn for_age(age: u32) -> Self {
        for (min, max, bucket) in AGE_RULES {
            if age >= min && max.is_none_or(|max| age <= max) {
                return bucket;
            }
        }
        AgeBucket::Unknown
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::From18To30 => "18-30",
            AgeBucket::From31To40 => "31-40",
            AgeBucket::From41To50 => "41-50",
            AgeBucket::From51 => "51+",
            AgeBucket::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AgeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Duration class of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationCategory {
    #[serde(rename = "Short (0-15 min)")]
    Short,
    #[serde(rename = "Medium (16-30 min)")]
    Medium,
    #[serde(rename = "Long (31-60 min)")]
    Long,
    #[serde(rename = "Very Long (60+ min)")]
    VeryLong,
}

/// Ordered `(max, category)` rules; anything past the last bound is
/// `VeryLong`.
const DURATION_RULES: [(i64, DurationCategory); 3] = [
    (15, DurationCategory::Short),
    (30, DurationCategory::Medium),
    (60, DurationCategory::Long),
];

impl DurationCategory {
    pub fn for_duration(minutes: i64) -> Self {
        for (max, category) in DURATION_RULES {
            if minutes <= max {
                return category;
            }
        }
        DurationCategory::VeryLong
    }

    pub fn label(&self) -> &'static str {
        match self {
            DurationCategory::Short => "Short (0-15 min)",
            DurationCategory::Medium => "Medium (16-30 min)",
            DurationCategory::Long => "Long (31-60 min)",
            DurationCategory::VeryLong => "Very Long (60+ min)",
        }
    }
}

impl fmt::Display for DurationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
