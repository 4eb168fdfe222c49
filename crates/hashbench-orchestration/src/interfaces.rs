//! Orchestration interfaces.

use serde::Serialize;

use hashbench_core::aggregator::AggregatedSummary;
use hashbench_core::error::BenchError;

/// Source of trial reports.
pub trait TrialRunner: Send + Sync {
    /// Run trial number `trial` (1-based) and return its standard output.
    ///
    /// Errors for which [`BenchError::is_fatal`] is false skip the trial;
    /// fatal errors stop the loop.
    fn run_trial(&self, trial: usize) -> Result<String, BenchError>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

/// Trait for following the trial loop as it runs.
pub trait TrialObserver: Send + Sync {
    /// A trial is about to start.
    fn on_trial_start(&self, trial: usize, total: usize);

    /// A trial succeeded and `records` timings were merged.
    fn on_trial_success(&self, trial: usize, records: usize);

    /// A trial failed and was skipped.
    fn on_trial_failure(&self, trial: usize, error: &BenchError);

    /// The loop finished.
    fn on_finish(&self, report: &RunReport);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the per-algorithm summary.
    fn present_summary(&self, summary: &AggregatedSummary);

    /// Present how the trial loop went.
    fn present_run(&self, report: &RunReport);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Outcome of a complete trial loop.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Trials started.
    pub attempted: usize,
    /// Trials whose report was parsed and merged.
    pub succeeded: usize,
    /// Records merged across all successful trials.
    pub records: usize,
    /// Why each skipped trial failed.
    #[serde(serialize_with = "serialize_failures")]
    pub failures: Vec<BenchError>,
}

impl RunReport {
    /// Number of skipped trials.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

fn serialize_failures<S>(failures: &[BenchError], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(failures.iter().map(ToString::to_string))
}

/// Observer that ignores every event.
pub struct NullObserver;

impl TrialObserver for NullObserver {
    fn on_trial_start(&self, _trial: usize, _total: usize) {}
    fn on_trial_success(&self, _trial: usize, _records: usize) {}
    fn on_trial_failure(&self, _trial: usize, _error: &BenchError) {}
    fn on_finish(&self, _report: &RunReport) {}
}
