use chrono::{NaiveTime, Timelike};

use crate::acceptability::AcceptabilityRanges;
use crate::error::TravelError;
use crate::units::{convert_time, TimeUnit, DEFAULT_TIME_UNIT};

/// Returned by [`Trip::distance_traveled`] when no distance was recorded.
pub const DISTANCE_UNSET: f64 = -1.0;

/// A single travel record within one day.
///
/// Construction rejects trips that cannot physically happen. Whether a trip is
/// acceptable for reporting is a separate question answered by [`Trip::check`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    start_time: NaiveTime,
    end_time: NaiveTime,
    /// Duration in the default time unit (hours).
    time_traveled: f64,
    /// `None` is reserved for distances computed from a route.
    distance_traveled: Option<f64>,
}

impl Trip {
    pub fn new(
        start_time: NaiveTime,
        end_time: NaiveTime,
        distance: f64,
    ) -> Result<Self, TravelError> {
        let trip = Self {
            start_time,
            end_time,
            time_traveled: time_between(start_time, end_time)?,
            distance_traveled: Some(distance),
        };
        trip.check_for_impossibilities()?;
        Ok(trip)
    }

    fn check_for_impossibilities(&self) -> Result<(), TravelError> {
        let mut violations = Vec::new();
        if self.distance_traveled.is_some_and(|distance| distance < 0.0) {
            violations.push("distance traveled is a negative value".to_string());
        }
        if self.end_time <= self.start_time {
            violations.push(
                "time traveled is not positive; start time must be earlier than end time"
                    .to_string(),
            );
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(TravelError::PhysicalImpossibility(violations))
        }
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn time_traveled(&self) -> f64 {
        self.time_traveled
    }

    pub fn distance_traveled(&self) -> f64 {
        // TODO: compute from origin, destination and travel method once routes exist.
        self.distance_traveled.unwrap_or(DISTANCE_UNSET)
    }

    pub fn average_speed(&self) -> f64 {
        self.distance_traveled() / self.time_traveled
    }

    /// True when time, distance and speed all fall inside `ranges`.
    pub fn check(trip: &Trip, ranges: &AcceptabilityRanges) -> bool {
        ranges.accepts(
            trip.time_traveled(),
            trip.distance_traveled(),
            trip.average_speed(),
        )
    }
}

fn time_between(start: NaiveTime, end: NaiveTime) -> Result<f64, TravelError> {
    let seconds = f64::from(end.num_seconds_from_midnight())
        - f64::from(start.num_seconds_from_midnight());
    convert_time(seconds, TimeUnit::Seconds, DEFAULT_TIME_UNIT)
}

#[cfg(test)]
impl Trip {
    pub(crate) fn without_distance(start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            start_time,
            end_time,
            time_traveled: time_between(start_time, end_time).expect("seconds convert to hours"),
            distance_traveled: None,
        }
    }
}
