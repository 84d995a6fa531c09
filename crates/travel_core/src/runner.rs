//! Run orchestration: apply a batch of commands, then report.

use log::{info, warn};
use serde::Serialize;

use crate::acceptability::AcceptabilityRanges;
use crate::error::TravelError;
use crate::parser::{parse_command, CommandOutcome};
use crate::registry::Registry;
use crate::report::{build_entries, build_report, ReportEntry};

/// What to do when a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing command and surface its error.
    #[default]
    Abort,
    /// Log the failing command and continue with the next one.
    Skip,
}

/// A command that failed under [`ErrorPolicy::Skip`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedCommand {
    /// 1-based line number in the input.
    pub line: usize,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub drivers_registered: usize,
    pub trips_accepted: usize,
    pub trips_rejected: usize,
    pub commands_ignored: usize,
    pub skipped: Vec<SkippedCommand>,
}

impl RunSummary {
    fn record(&mut self, outcome: &CommandOutcome) {
        match outcome {
            CommandOutcome::DriverRegistered { .. } => self.drivers_registered += 1,
            CommandOutcome::TripAccepted { .. } => self.trips_accepted += 1,
            CommandOutcome::TripRejected { .. } => self.trips_rejected += 1,
            CommandOutcome::Ignored => self.commands_ignored += 1,
        }
    }
}

/// State for one run: the driver registry and the acceptability ranges it is judged by.
#[derive(Debug, Clone, Default)]
pub struct TravelRun {
    registry: Registry,
    ranges: AcceptabilityRanges,
    policy: ErrorPolicy,
}

impl TravelRun {
    pub fn new(ranges: AcceptabilityRanges) -> Self {
        Self {
            ranges,
            ..Default::default()
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn ranges(&self) -> &AcceptabilityRanges {
        &self.ranges
    }

    pub fn ranges_mut(&mut self) -> &mut AcceptabilityRanges {
        &mut self.ranges
    }

    /// Applies commands strictly in order.
    pub fn process_commands<S: AsRef<str>>(
        &mut self,
        lines: &[Vec<S>],
    ) -> Result<RunSummary, TravelError> {
        let mut summary = RunSummary::default();
        for (index, tokens) in lines.iter().enumerate() {
            match parse_command(tokens.as_slice(), &mut self.registry, &self.ranges) {
                Ok(outcome) => {
                    if let CommandOutcome::TripRejected { driver } = &outcome {
                        warn!(
                            "line {}: trip for '{driver}' is outside acceptability ranges",
                            index + 1
                        );
                    }
                    summary.record(&outcome);
                }
                Err(error) if self.policy == ErrorPolicy::Skip => {
                    warn!("line {}: skipping command: {error}", index + 1);
                    summary.skipped.push(SkippedCommand {
                        line: index + 1,
                        kind: error.kind(),
                        message: error.to_string(),
                    });
                }
                Err(error) => return Err(error),
            }
        }

        info!(
            "processed {} commands: {} drivers, {} trips accepted, {} rejected, {} skipped",
            lines.len(),
            summary.drivers_registered,
            summary.trips_accepted,
            summary.trips_rejected,
            summary.skipped.len()
        );
        Ok(summary)
    }

    pub fn entries(&self) -> Vec<ReportEntry> {
        build_entries(&self.registry)
    }

    pub fn build_report(&self) -> String {
        build_report(&self.registry)
    }

    /// Clears all drivers, keeping ranges and policy.
    pub fn reset(&mut self) {
        self.registry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<Vec<String>> {
        input
            .iter()
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn abort_policy_surfaces_first_error() {
        let mut run = TravelRun::default();
        let error = run
            .process_commands(&lines(&["Driver Dan", "Trip Jane 01:55 03:20 55.4", "Driver Jane"]))
            .expect_err("Jane is undeclared");
        assert_eq!(error, TravelError::UnknownDriver("Jane".to_string()));
        assert_eq!(run.registry().len(), 1);
    }

    #[test]
    fn skip_policy_continues_past_bad_commands() {
        let mut run = TravelRun::default().with_policy(ErrorPolicy::Skip);
        let summary = run
            .process_commands(&lines(&[
                "Driver Dan",
                "Driver J1",
                "Trip Dan 11:15 11:45 32.3",
                "Trip Dan 9:00 10:00 30",
                "Trip Dan 11:00 12:00 300",
                "Honk Dan",
            ]))
            .expect("skip policy never fails");

        assert_eq!(summary.drivers_registered, 1);
        assert_eq!(summary.trips_accepted, 1);
        assert_eq!(summary.trips_rejected, 1);
        assert_eq!(summary.commands_ignored, 1);
        let skipped: Vec<(usize, &str)> = summary
            .skipped
            .iter()
            .map(|skipped| (skipped.line, skipped.kind))
            .collect();
        assert_eq!(skipped, [(2, "invalid_name"), (4, "malformed_time")]);
        assert_eq!(run.build_report(), "Dan: 32 miles @ 65 mph\n");
    }

    #[test]
    fn skipped_lines_count_blank_lines() {
        let mut run = TravelRun::default().with_policy(ErrorPolicy::Skip);
        let summary = run
            .process_commands(&lines(&["Driver Dan", "", "   ", "Trip Jane 01:55 03:20 55.4"]))
            .expect("skip policy never fails");

        assert_eq!(summary.commands_ignored, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].line, 4);
        assert_eq!(summary.skipped[0].kind, "unknown_driver");
    }

    #[test]
    fn ranges_can_be_tightened_between_runs() {
        let mut run = TravelRun::default();
        run.ranges_mut().set_speed_range(Some(70.0), None);
        run.process_commands(&lines(&[
            "Driver Dan",
            "Trip Dan 11:15 11:45 32.3",
            "Trip Dan 18:04 19:38 115.6",
        ]))
        .expect("commands apply");
        assert_eq!(run.build_report(), "Dan: 116 miles @ 74 mph\n");

        run.reset();
        assert!(run.registry().is_empty());
        assert_eq!(run.ranges().speed_range().min, Some(70.0));
    }
}
