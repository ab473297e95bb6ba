//! Forecast record types.
//!
//! Records are immutable values built once per extraction call. Ordering inside a
//! returned sequence follows the page layout (nearest hour/day first) and is never
//! re-sorted.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reserved value for a reading the page rendered as a placeholder glyph.
///
/// It is not a temperature. Consumers must compare against this constant (or use
/// [`TenDayForecastEntry::reported_high_temp`]) before doing arithmetic on the field.
pub const MISSING_VALUE: i32 = -99;

/// One slot of the hourly listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecastEntry {
    /// Epoch seconds of the hour the forecast applies to.
    pub valid_time: i64,
    /// Epoch seconds of the page capture.
    pub recorded_time: i64,
    /// Degrees.
    pub temperature: i32,
    /// Percent; [0, 100] is expected but not enforced by the source.
    pub precip_chance: i32,
}

/// One slot of the ten-day listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenDayForecastEntry {
    /// Local calendar date the forecast applies to.
    pub valid_date: NaiveDate,
    /// Epoch seconds of the page capture.
    pub recorded_time: i64,
    /// Degrees, or [`MISSING_VALUE`] when the page showed a placeholder.
    pub high_temp: i32,
    /// Degrees.
    pub low_temp: i32,
    /// Percent.
    pub precip_chance: i32,
}

impl TenDayForecastEntry {
    /// High temperature, or `None` when the page did not report one.
    pub fn reported_high_temp(&self) -> Option<i32> {
        (self.high_temp != MISSING_VALUE).then_some(self.high_temp)
    }
}

/// The two listings the provider renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForecastKind {
    Hourly,
    TenDay,
}

impl ForecastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastKind::Hourly => "hourly",
            ForecastKind::TenDay => "ten_day",
        }
    }
}

impl fmt::Display for ForecastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named fields exposed by a listing slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    HourLabel,
    MonthDay,
    Temperature,
    HighTemp,
    LowTemp,
    PrecipChance,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::HourLabel => "hour",
            Field::MonthDay => "month_day",
            Field::Temperature => "temperature",
            Field::HighTemp => "high_temp",
            Field::LowTemp => "low_temp",
            Field::PrecipChance => "precip_chance",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
