use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

const SAMPLE_INPUT: &str = "crates/travel_cli/tests/fixtures/sample_input.txt";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the travel report workspace",
    long_about = "A unified CLI for running the report on sample input, benchmarks,\n\
                  and CI checks in the travel report workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the report on an input file (defaults to the bundled sample)
    Run {
        /// Input file with Driver and Trip commands
        #[arg(long, default_value = SAMPLE_INPUT)]
        input: String,
        /// Extra arguments forwarded to travel_report
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Benchmark uncommitted changes against the committed tree
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the report on the sample input
    Sample,
    /// Run benchmarks
    Bench,
    /// Run check + sample + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn spawn(program: &str, args: &[&str]) -> ExitStatus {
    eprintln!("+ {program} {}", args.join(" "));
    match Command::new(program).args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to execute {program}: {error}");
            exit(1);
        }
    }
}

fn run_checked(program: &str, args: &[&str]) {
    let status = spawn(program, args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_cargo(args: &[&str]) {
    run_checked("cargo", args);
}

fn run_git(args: &[&str]) {
    run_checked("git", args);
}

fn run_report(input: &str, extra: &[String]) {
    let mut args = vec!["run", "-p", "travel_cli", "--bin", "travel_report", "--", input];
    args.extend(extra.iter().map(String::as_str));
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test travel_core");
    run_cargo(&["test", "-p", "travel_core"]);

    step("Test travel_cli");
    run_cargo(&["test", "-p", "travel_cli"]);
}

fn ci_sample() {
    step("Report on sample input");
    run_report(SAMPLE_INPUT, &[]);

    step("Report on sample input (metric, csv)");
    run_report(
        SAMPLE_INPUT,
        &["--units".to_string(), "metric".to_string(), "--format".to_string(), "csv".to_string()],
    );
}

fn ci_bench() {
    step("Run benchmarks");
    bench_performance(&[]);
}

fn bench_performance(extra: &[&str]) {
    let mut args = vec!["bench", "-p", "travel_core", "--bench", "performance"];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&args);
}

/// Benchmarks the committed tree as a `committed` baseline, then the working
/// tree against it.
fn bench_compare() {
    let criterion_dir = Path::new("target/criterion");
    if criterion_dir.exists() {
        step("Clearing old criterion results");
        if let Err(error) = std::fs::remove_dir_all(criterion_dir) {
            eprintln!("could not clear {}: {error}", criterion_dir.display());
            exit(1);
        }
    }

    step("Stashing working tree");
    run_git(&["stash", "push", "-m", "xtask bench-compare"]);

    step("Benchmarking committed tree");
    bench_performance(&["--save-baseline", "committed"]);

    step("Restoring working tree");
    run_git(&["stash", "pop"]);

    step("Benchmarking working tree against committed baseline");
    bench_performance(&["--baseline", "committed"]);

    eprintln!("\nCompare the travel_core timings above against the committed baseline.");
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, args } => run_report(&input, &args),
        Commands::Bench => ci_bench(),
        Commands::BenchCompare => bench_compare(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Sample => ci_sample(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_sample();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
