//! Trial progress bar.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use hashbench_core::error::BenchError;
use hashbench_orchestration::interfaces::{RunReport, TrialObserver};

use crate::output::format_duration;

const TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials {msg}";

/// [`TrialObserver`] that drives an `indicatif` bar on stderr.
pub struct CLIProgressObserver {
    bar: ProgressBar,
}

impl CLIProgressObserver {
    /// Bar for `total` trials; hidden when `quiet`.
    #[must_use]
    pub fn new(total: usize, quiet: bool) -> Self {
        let bar = ProgressBar::new(total as u64);
        if quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar.set_style(
            ProgressStyle::default_bar()
                .template(TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// Trials completed so far, successful or not.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl TrialObserver for CLIProgressObserver {
    fn on_trial_start(&self, trial: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_message(format!("running trial {trial}"));
    }

    fn on_trial_success(&self, _trial: usize, records: usize) {
        self.bar.set_message(format!("{records} timings"));
        self.bar.inc(1);
    }

    /// Failure details are reported once by the presenter after the run.
    fn on_trial_failure(&self, trial: usize, _error: &BenchError) {
        self.bar.set_message(format!("trial {trial} skipped"));
        self.bar.inc(1);
    }

    fn on_finish(&self, report: &RunReport) {
        self.bar.finish_with_message(format!(
            "done in {} ({} failed)",
            format_duration(self.bar.elapsed()),
            report.failed()
        ));
    }
}
