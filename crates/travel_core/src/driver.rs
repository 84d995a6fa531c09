use crate::acceptability::AcceptabilityRanges;
use crate::trip::Trip;

/// A named driver and the trips accepted for them, in acceptance order.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    name: String,
    trips: Vec<Trip>,
}

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trips: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Stores `trip` if it passes the acceptability check. Returns whether it was stored.
    pub fn add_trip(&mut self, trip: Trip, ranges: &AcceptabilityRanges) -> bool {
        if !Trip::check(&trip, ranges) {
            return false;
        }
        self.trips.push(trip);
        true
    }

    pub fn distance_traveled(&self) -> f64 {
        self.trips
            .iter()
            .fold(0.0, |total, trip| total + trip.distance_traveled())
    }

    pub fn time_traveled(&self) -> f64 {
        self.trips
            .iter()
            .fold(0.0, |total, trip| total + trip.time_traveled())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveTime};

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    fn standard_ranges() -> AcceptabilityRanges {
        let mut ranges = AcceptabilityRanges::default();
        ranges.set_time_range(Some(0.0), Some(60.0 * 3600.0));
        ranges.set_distance_range(Some(0.0), None);
        ranges.set_speed_range(Some(5.0), Some(100.0));
        ranges
    }

    #[test]
    fn keeps_its_name() {
        assert_eq!(Driver::new("Daniel").name(), "Daniel");
    }

    #[test]
    fn add_trip_stores_acceptable_trip() {
        let mut driver = Driver::new("Daniel");
        let start = at(15, 18);
        let trip = Trip::new(start, start + Duration::hours(3), 73.9).expect("trip should build");

        assert!(driver.add_trip(trip, &standard_ranges()));
        assert_eq!(driver.trips().len(), 1);
        assert!((driver.distance_traveled() - 73.9).abs() < 0.001);
        assert!((driver.time_traveled() - 3.0).abs() < 0.001);
    }

    #[test]
    fn add_trip_skips_unacceptable_trip() {
        let mut driver = Driver::new("Daniel");
        // 1 mile in an hour is below the 5 mph default minimum.
        let slow = Trip::new(at(9, 0), at(10, 0), 1.0).expect("trip should build");

        assert!(!driver.add_trip(slow, &standard_ranges()));
        assert!(driver.trips().is_empty());
        assert_eq!(driver.distance_traveled(), 0.0);
        assert_eq!(driver.time_traveled(), 0.0);
    }

    #[test]
    fn trips_within_custom_requirements_are_all_stored() {
        let mut ranges = standard_ranges();
        ranges.set_time_range(Some(1.0), Some(2.0));
        ranges.set_distance_range(Some(50.0), Some(251.0));
        ranges.set_speed_range(Some(40.0), Some(150.0));

        let mut driver = Driver::new("Daniel");
        for (start, end, distance) in [
            (at(5, 1), at(6, 31), 150.0),
            (at(20, 1), at(21, 3), 60.0),
            (at(10, 51), at(12, 40), 250.0),
        ] {
            let trip = Trip::new(start, end, distance).expect("trip should build");
            assert!(driver.add_trip(trip, &ranges));
        }
        assert_eq!(driver.trips().len(), 3);
    }

    #[test]
    fn totals_sum_stored_trips() {
        let mut driver = Driver::new("Daniel");
        let start = at(1, 1);
        let minutes: [i32; 5] = [168, 599, 42, 861, 44];
        let miles = [200.0, 500.0, 20.0, 560.0, 40.0];

        let mut expected_hours = 0.0;
        let mut expected_miles = 0.0;
        for (mins, distance) in minutes.into_iter().zip(miles) {
            expected_hours += f64::from(mins) / 60.0;
            expected_miles += distance;
            let trip = Trip::new(start, start + Duration::minutes(i64::from(mins)), distance)
                .expect("trip should build");
            assert!(driver.add_trip(trip, &standard_ranges()));
        }

        assert!((driver.time_traveled() - expected_hours).abs() < 0.001);
        assert!((driver.distance_traveled() - expected_miles).abs() < 0.001);
    }
}
