//! Conversions between time, distance and speed units.
//!
//! Time and distance each have a table of multipliers relative to one default
//! unit (hours and miles). Speed is derived from a distance and a time unit, so
//! it has no table of its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TravelError;

/// Kilometers in one mile.
pub const KILOMETERS_PER_MILE: f64 = 1.60934;

pub const DEFAULT_TIME_UNIT: TimeUnit = TimeUnit::Hours;
pub const DEFAULT_DISTANCE_UNIT: DistanceUnit = DistanceUnit::Miles;
pub const DEFAULT_SPEED_UNIT: SpeedUnit = SpeedUnit::MilesPerHour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Multiplier relative to hours, or `None` when the unit has no table entry.
    fn per_default(self) -> Option<f64> {
        match self {
            TimeUnit::Hours => Some(1.0),
            TimeUnit::Minutes => Some(60.0),
            TimeUnit::Seconds => Some(3600.0),
            TimeUnit::Nanoseconds
            | TimeUnit::Microseconds
            | TimeUnit::Milliseconds
            | TimeUnit::Days => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeUnit::Nanoseconds => "NANOSECONDS",
            TimeUnit::Microseconds => "MICROSECONDS",
            TimeUnit::Milliseconds => "MILLISECONDS",
            TimeUnit::Seconds => "SECONDS",
            TimeUnit::Minutes => "MINUTES",
            TimeUnit::Hours => "HOURS",
            TimeUnit::Days => "DAYS",
        };
        write!(f, "TimeUnit::{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Miles,
    Kilometers,
}

impl DistanceUnit {
    fn per_default(self) -> Option<f64> {
        match self {
            DistanceUnit::Miles => Some(1.0),
            DistanceUnit::Kilometers => Some(KILOMETERS_PER_MILE),
        }
    }

    /// Label used in rendered reports.
    pub fn label(self) -> &'static str {
        match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DistanceUnit::{}", self.label().to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedUnit {
    MilesPerHour,
    KilometersPerHour,
}

impl SpeedUnit {
    pub fn distance_unit(self) -> DistanceUnit {
        match self {
            SpeedUnit::MilesPerHour => DistanceUnit::Miles,
            SpeedUnit::KilometersPerHour => DistanceUnit::Kilometers,
        }
    }

    pub fn time_unit(self) -> TimeUnit {
        match self {
            SpeedUnit::MilesPerHour | SpeedUnit::KilometersPerHour => TimeUnit::Hours,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::MilesPerHour => "mph",
            SpeedUnit::KilometersPerHour => "kmh",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn factor<U>(unit: U, lookup: fn(U) -> Option<f64>) -> Result<f64, TravelError>
where
    U: fmt::Display + Copy,
{
    lookup(unit).ok_or_else(|| TravelError::UnsupportedUnit(unit.to_string()))
}

pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> Result<f64, TravelError> {
    let from_factor = factor(from, TimeUnit::per_default)?;
    let to_factor = factor(to, TimeUnit::per_default)?;
    Ok(value * to_factor / from_factor)
}

pub fn convert_distance(
    value: f64,
    from: DistanceUnit,
    to: DistanceUnit,
) -> Result<f64, TravelError> {
    let from_factor = factor(from, DistanceUnit::per_default)?;
    let to_factor = factor(to, DistanceUnit::per_default)?;
    Ok(value * to_factor / from_factor)
}

/// Converts the distance part normally and the time part inversely, since
/// time sits in the denominator of a speed.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> Result<f64, TravelError> {
    let distance = convert_distance(value, from.distance_unit(), to.distance_unit())?;
    Ok(distance / convert_time(1.0, to.time_unit(), from.time_unit())?)
}

/// One minute expressed in the default time unit.
pub fn one_minute() -> f64 {
    1.0 / 60.0
}
