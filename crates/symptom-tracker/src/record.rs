//! Core record types for symptom-tracker.
//!
//! A [`SymptomRecord`] pairs a calendar date with a bounded severity
//! [`Level`]. Record sequences are kept in ascending date order; see
//! [`merge_record`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Date format used for persistence and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A symptom severity level in the inclusive range `1..=10`.
///
/// There is no way to hold an out-of-range value: [`Level::new`] validates and
/// [`Level::clamped`] behaves like a bounded slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Lowest severity.
    pub const MIN: Self = Self(1);
    /// Highest severity.
    pub const MAX: Self = Self(10);
    /// Severity preselected on a fresh entry form.
    pub const DEFAULT: Self = Self(5);

    /// Create a level, rejecting values outside `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LevelOutOfRange`] if `value` is out of range.
    pub fn new(value: u8) -> Result<Self> {
        Self::try_from(i64::from(value))
    }

    /// Create a level by clamping `value` into `1..=10`.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        // In range after the clamp.
        Self(u8::try_from(clamped).unwrap_or(Self::DEFAULT.0))
    }

    /// The numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for Level {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN.0..=Self::MAX.0).contains(&v) => Ok(Self(v)),
            _ => Err(Error::LevelOutOfRange {
                value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            }),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s.trim().parse().map_err(|_| Error::InvalidLevel {
            input: s.to_string(),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single (date, severity) observation.
///
/// Serializes as `{"date": "YYYY-MM-DD", "level": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymptomRecord {
    /// The day the symptom was observed.
    pub date: NaiveDate,
    /// How severe it was.
    pub level: Level,
}

impl SymptomRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(date: NaiveDate, level: Level) -> Self {
        Self { date, level }
    }

    /// The date formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `input` is not a valid calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| Error::invalid_date(input))
}

/// Append `record` to `records` and return the result sorted by date.
///
/// The sort is stable, so records sharing a date keep their insertion order.
/// Nothing is deduplicated.
#[must_use]
pub fn merge_record(records: &[SymptomRecord], record: SymptomRecord) -> Vec<SymptomRecord> {
    let mut merged = Vec::with_capacity(records.len() + 1);
    merged.extend_from_slice(records);
    merged.push(record);
    merged.sort_by_key(|r| r.date);
    merged
}

/// Whether `records` is non-decreasing by date.
#[must_use]
pub fn is_chronological(records: &[SymptomRecord]) -> bool {
    records.windows(2).all(|pair| pair[0].date <= pair[1].date)
}
