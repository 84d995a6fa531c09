use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};
use log::info;
use travel_core::{
    export_csv, export_json, load_ranges, read_command_file, render_text, AcceptabilityRanges,
    ErrorPolicy, ReportUnits, TravelRun,
};

const INPUT_FORMAT_HELP: &str = "\
Input format:

  Driver <name>
  Trip <name> <start-time> <end-time> <miles-traveled>

Example:

  Driver Maggie
  Trip Maggie 11:40 13:10 85.6

Any number of drivers can be listed, and drivers can take any number of trips.
Requirements:
  1. Drivers must be added with \"Driver <name>\" before their trips are listed.
  2. Trip start and end times must be in HH:MM format (e.g. 01:20).
  3. Trips have to be within the same day (they cannot pass midnight).
  4. Miles and time traveled cannot be negative.

Trips outside the acceptability ranges (by default 5-100 mph) are left out of
the report. Set RUST_LOG=warn or higher to see which trips were dropped.";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "travel_report",
    about = "Report total distance and average speed per driver",
    after_help = INPUT_FORMAT_HELP
)]
struct Cli {
    /// Input file with Driver and Trip commands, one per line
    input: PathBuf,
    /// JSON file overriding the time, distance and speed acceptability ranges
    #[arg(long, env = "TRAVEL_RANGES")]
    config: Option<PathBuf>,
    /// Report output format
    #[arg(value_enum, long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Units for distances and speeds in the report
    #[arg(value_enum, long, default_value_t = Units::Imperial)]
    units: Units,
    /// Skip commands that fail instead of aborting the run
    #[arg(long)]
    skip_invalid: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum Units {
    /// Miles and miles per hour
    Imperial,
    /// Kilometers and kilometers per hour
    Metric,
}

impl Units {
    fn report_units(self) -> ReportUnits {
        match self {
            Self::Imperial => ReportUnits::default(),
            Self::Metric => ReportUnits::metric(),
        }
    }
}

// ── main ───────────────────────────────────────────────────────────

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let ranges = match &cli.config {
        Some(path) => load_ranges(path)?,
        None => AcceptabilityRanges::default(),
    };
    let policy = if cli.skip_invalid {
        ErrorPolicy::Skip
    } else {
        ErrorPolicy::Abort
    };

    let commands = read_command_file(&cli.input)?;
    let mut travel_run = TravelRun::new(ranges).with_policy(policy);
    let summary = travel_run.process_commands(&commands)?;
    for skipped in &summary.skipped {
        eprintln!("warning: line {}: {}", skipped.line, skipped.message);
    }

    let entries = travel_run.entries();
    let units = cli.units.report_units();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => out.write_all(render_text(&entries, units)?.as_bytes())?,
        OutputFormat::Json => {
            export_json(&entries, units, &mut out)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => export_csv(&entries, units, &mut out)?,
    }
    out.flush()?;

    info!("reported {} drivers from {}", entries.len(), cli.input.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        exit(1);
    }
}
