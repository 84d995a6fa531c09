use std::io::Write;

use tempfile::NamedTempFile;
use travel_core::{read_commands, CommandLine, TravelRun};

/// Input used throughout the report tests: three drivers, one without trips.
pub const SAMPLE_INPUT: &str = "Driver Dan
Driver Jane
Driver Tim
Trip Dan 07:15 07:45 17.3
Trip Dan 06:12 06:32 21.8
Trip Jane 12:01 13:16 42.0
";

pub const SAMPLE_REPORT: &str = "Jane: 42 miles @ 34 mph\nDan: 39 miles @ 47 mph\nTim: 0 miles\n";

/// Tokenizes inline input the same way input files are read.
pub fn commands(input: &str) -> Vec<CommandLine> {
    read_commands(input.as_bytes()).expect("inline input reads")
}

/// Runs `input` with default ranges and abort policy.
pub fn run_input(input: &str) -> TravelRun {
    let mut run = TravelRun::default();
    run.process_commands(&commands(input))
        .expect("commands should apply");
    run
}

/// Writes `contents` to a temporary input file kept alive by the returned handle.
pub fn input_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write input");
    file
}
