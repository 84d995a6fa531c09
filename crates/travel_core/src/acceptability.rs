//! Acceptability ranges a trip must fall within to be stored on a driver.
//!
//! Values are expressed in the default units (hours, miles, miles per hour).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TravelError;

/// Inclusive `[min, max]` window. A `None` bound leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Range {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    pub fn contains(&self, value: f64) -> bool {
        let below_min = self.min.is_some_and(|min| value < min);
        let above_max = self.max.is_some_and(|max| value > max);
        !below_min && !above_max
    }
}

/// Time, distance and speed windows for acceptable trips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcceptabilityRanges {
    time: Range,
    distance: Range,
    speed: Range,
}

impl Default for AcceptabilityRanges {
    fn default() -> Self {
        Self {
            time: Range::new(Some(0.0), Some(24.0)),
            distance: Range::new(Some(0.0), None),
            speed: Range::new(Some(5.0), Some(100.0)),
        }
    }
}

impl AcceptabilityRanges {
    /// Ranges that accept every physically possible trip.
    pub fn permissive() -> Self {
        Self {
            time: Range::unbounded(),
            distance: Range::unbounded(),
            speed: Range::unbounded(),
        }
    }

    pub fn time_range(&self) -> Range {
        self.time
    }

    pub fn distance_range(&self) -> Range {
        self.distance
    }

    pub fn speed_range(&self) -> Range {
        self.speed
    }

    pub fn set_time_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.time = Range::new(min, max);
    }

    pub fn set_distance_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.distance = Range::new(min, max);
    }

    pub fn set_speed_range(&mut self, min: Option<f64>, max: Option<f64>) {
        self.speed = Range::new(min, max);
    }

    pub fn accepts(&self, time: f64, distance: f64, speed: f64) -> bool {
        self.time.contains(time) && self.distance.contains(distance) && self.speed.contains(speed)
    }
}

/// Loads acceptability ranges from a JSON file. Omitted ranges keep their defaults.
pub fn load_ranges(path: impl AsRef<Path>) -> Result<AcceptabilityRanges, TravelError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|error| {
        TravelError::Config(format!(
            "failed to read acceptability config {}: {error}",
            path.display()
        ))
    })?;
    parse_ranges(&contents)
        .map_err(|error| TravelError::Config(format!("{}: {error}", path.display())))
}

pub fn parse_ranges(json: &str) -> Result<AcceptabilityRanges, TravelError> {
    serde_json::from_str(json)
        .map_err(|error| TravelError::Config(format!("invalid acceptability config: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Range::new(Some(1.0), Some(2.0));
        assert!(range.contains(1.0));
        assert!(range.contains(2.0));
        assert!(!range.contains(0.999));
        assert!(!range.contains(2.001));
    }

    #[test]
    fn unset_bounds_are_unbounded() {
        assert!(Range::new(None, Some(5.0)).contains(-1_000.0));
        assert!(Range::new(Some(5.0), None).contains(1.0e9));
        assert!(Range::unbounded().contains(f64::MAX));
    }

    #[test]
    fn setters_replace_both_bounds() {
        let mut ranges = AcceptabilityRanges::default();
        ranges.set_time_range(Some(1.0), Some(2.0));
        ranges.set_distance_range(Some(50.0), Some(200.0));
        ranges.set_speed_range(Some(40.0), None);

        assert_eq!(ranges.time_range(), Range::new(Some(1.0), Some(2.0)));
        assert_eq!(ranges.distance_range(), Range::new(Some(50.0), Some(200.0)));
        assert_eq!(ranges.speed_range(), Range::new(Some(40.0), None));
    }

    #[test]
    fn defaults_bound_speed_between_5_and_100() {
        let ranges = AcceptabilityRanges::default();
        assert_eq!(ranges.speed_range(), Range::new(Some(5.0), Some(100.0)));
        assert!(ranges.accepts(0.5, 32.3, 64.6));
        assert!(!ranges.accepts(0.5, 1.0, 2.0));
        assert!(!ranges.accepts(0.5, 60.0, 120.0));
    }

    #[test]
    fn parse_ranges_keeps_defaults_for_omitted_fields() {
        let ranges = parse_ranges(r#"{ "speed": { "min": 10.0, "max": null } }"#)
            .expect("config should parse");
        assert_eq!(ranges.speed_range(), Range::new(Some(10.0), None));
        assert_eq!(
            ranges.time_range(),
            AcceptabilityRanges::default().time_range()
        );
    }

    #[test]
    fn parse_ranges_rejects_invalid_json() {
        let error = parse_ranges("{ speed: ").expect_err("config should fail");
        assert_eq!(error.kind(), "config");
    }
}
