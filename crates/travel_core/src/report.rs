//! Per-driver statistics and the rendered driver report.
//!
//! Entries are computed in the default units and sorted by distance,
//! longest first. Rendering converts them into the requested [`ReportUnits`].

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::driver::Driver;
use crate::error::TravelError;
use crate::registry::Registry;
use crate::units::{
    convert_distance, convert_speed, one_minute, DistanceUnit, SpeedUnit, DEFAULT_DISTANCE_UNIT,
    DEFAULT_SPEED_UNIT,
};

/// Units the report is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportUnits {
    pub distance: DistanceUnit,
    pub speed: SpeedUnit,
}

impl Default for ReportUnits {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE_UNIT,
            speed: DEFAULT_SPEED_UNIT,
        }
    }
}

impl ReportUnits {
    pub fn metric() -> Self {
        Self {
            distance: DistanceUnit::Kilometers,
            speed: SpeedUnit::KilometersPerHour,
        }
    }
}

/// Statistics for one driver, in default units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub name: String,
    pub distance: f64,
    /// Hours.
    pub time: f64,
    /// Zero when the driver has not traveled for more than a minute.
    pub average_speed: f64,
}

impl ReportEntry {
    pub fn from_driver(driver: &Driver) -> Self {
        let distance = driver.distance_traveled();
        let time = driver.time_traveled();
        let average_speed = if time > one_minute() {
            distance / time
        } else {
            0.0
        };
        Self {
            name: driver.name().to_string(),
            distance,
            time,
            average_speed,
        }
    }

    /// Whether the driver traveled long enough for a meaningful average speed.
    pub fn has_travel(&self) -> bool {
        self.time > one_minute()
    }
}

/// One report row after unit conversion, as written by the JSON and CSV exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub name: String,
    pub distance: f64,
    pub distance_unit: &'static str,
    pub time_hours: f64,
    pub average_speed: Option<f64>,
    pub speed_unit: &'static str,
}

impl ReportLine {
    /// Line for `entry` with distance and speed already expressed in `units`.
    fn with_values(entry: &ReportEntry, units: ReportUnits, distance: f64, speed: f64) -> Self {
        Self {
            name: entry.name.clone(),
            distance,
            distance_unit: units.distance.label(),
            time_hours: entry.time,
            average_speed: entry.has_travel().then_some(speed),
            speed_unit: units.speed.label(),
        }
    }

    fn convert(entry: &ReportEntry, units: ReportUnits) -> Result<Self, TravelError> {
        let distance = convert_distance(entry.distance, DEFAULT_DISTANCE_UNIT, units.distance)?;
        let speed = convert_speed(entry.average_speed, DEFAULT_SPEED_UNIT, units.speed)?;
        Ok(Self::with_values(entry, units, distance, speed))
    }

    fn render(&self) -> String {
        let mut line = format!(
            "{}: {} {}",
            self.name,
            round_half_up(self.distance),
            self.distance_unit
        );
        if let Some(speed) = self.average_speed {
            line.push_str(&format!(" @ {} {}", round_half_up(speed), self.speed_unit));
        }
        line
    }
}

/// Distances and speeds are never negative, so rounding halves away from zero
/// is rounding half up.
fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

/// Report entries for every registered driver, longest distance first.
/// Drivers with equal distances keep name order.
pub fn build_entries(registry: &Registry) -> Vec<ReportEntry> {
    let mut entries: Vec<ReportEntry> = registry.iter().map(ReportEntry::from_driver).collect();
    entries.sort_by(|left, right| right.distance.total_cmp(&left.distance));
    entries
}

/// Renders the report in default units.
pub fn build_report(registry: &Registry) -> String {
    let units = ReportUnits::default();
    let lines = build_entries(registry)
        .iter()
        .map(|entry| ReportLine::with_values(entry, units, entry.distance, entry.average_speed))
        .collect::<Vec<_>>();
    join_lines(&lines)
}

pub fn report_lines(
    entries: &[ReportEntry],
    units: ReportUnits,
) -> Result<Vec<ReportLine>, TravelError> {
    entries
        .iter()
        .map(|entry| ReportLine::convert(entry, units))
        .collect()
}

/// Renders entries as text, one line per driver, each terminated by a newline.
pub fn render_text(entries: &[ReportEntry], units: ReportUnits) -> Result<String, TravelError> {
    Ok(join_lines(&report_lines(entries, units)?))
}

fn join_lines(lines: &[ReportLine]) -> String {
    lines.iter().fold(String::new(), |mut report, line| {
        report.push_str(&line.render());
        report.push('\n');
        report
    })
}

pub fn export_json(
    entries: &[ReportEntry],
    units: ReportUnits,
    writer: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = report_lines(entries, units)?;
    serde_json::to_writer_pretty(writer, &lines)?;
    Ok(())
}

pub fn export_csv(
    entries: &[ReportEntry],
    units: ReportUnits,
    writer: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(writer);
    for line in report_lines(entries, units)? {
        wtr.serialize(line)?;
    }
    wtr.flush()?;
    Ok(())
}
