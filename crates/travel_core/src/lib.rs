//! Driver trip log: command parsing, trip validation and per-driver reporting.
//!
//! # Quick Start
//!
//! ```
//! use travel_core::{read_commands, AcceptabilityRanges, TravelRun};
//!
//! let input = "Driver Dan\nTrip Dan 07:15 07:45 17.3\n";
//! let commands = read_commands(input.as_bytes()).unwrap();
//!
//! let mut run = TravelRun::new(AcceptabilityRanges::default());
//! run.process_commands(&commands).unwrap();
//! assert_eq!(run.build_report(), "Dan: 17 miles @ 35 mph\n");
//! ```
//!
//! # Architecture
//!
//! - [`units`]: time, distance and speed conversions anchored on hours and miles
//! - [`trip`]: a single trip, rejected at construction when physically impossible
//! - [`acceptability`]: ranges deciding whether a trip counts towards a driver
//! - [`driver`] and [`registry`]: drivers and their accepted trips
//! - [`parser`]: DRIVER and TRIP commands applied against a registry
//! - [`report`]: sorted per-driver statistics, text and JSON/CSV export
//! - [`runner`]: one run's state and error policy

pub mod acceptability;
pub mod driver;
pub mod error;
pub mod input;
pub mod parser;
pub mod registry;
pub mod report;
pub mod runner;
pub mod trip;
pub mod units;

pub use acceptability::{load_ranges, AcceptabilityRanges, Range};
pub use driver::Driver;
pub use error::TravelError;
pub use input::{read_command_file, read_commands, CommandLine};
pub use parser::{parse_command, parse_commands, CommandOutcome};
pub use registry::Registry;
pub use report::{
    build_entries, build_report, export_csv, export_json, render_text, ReportEntry, ReportUnits,
};
pub use runner::{ErrorPolicy, RunSummary, TravelRun};
pub use trip::Trip;
