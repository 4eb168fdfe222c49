//! CLI result presenter.

use hashbench_core::aggregator::AggregatedSummary;
use hashbench_orchestration::interfaces::{ResultPresenter, RunReport};

use crate::output::{format_level, format_report, format_sequential};
use crate::ui;

/// Prints the per-algorithm report on stdout and run status on stderr.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_summary(&self, summary: &AggregatedSummary) {
        if self.quiet {
            print!("{}", format_report(summary));
            return;
        }

        for (i, algo) in summary.algorithms.iter().enumerate() {
            if i > 0 {
                println!();
            }
            ui::print_header(algo.algorithm.as_str());
            println!("{}", format_sequential(algo));
            for stats in &algo.levels {
                println!("{}", format_level(stats));
            }
            if self.verbose {
                println!(
                    "  ({} sequential samples, {} parallel samples)",
                    algo.sequential_samples,
                    algo.levels.iter().map(|l| l.samples).sum::<usize>()
                );
            }
        }
    }

    fn present_run(&self, report: &RunReport) {
        if self.quiet {
            return;
        }

        for failure in &report.failures {
            ui::print_warning(&failure.to_string());
        }
        ui::print_success(&format!(
            "{}/{} trials succeeded, {} timings collected",
            report.succeeded, report.attempted, report.records
        ));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbench_core::aggregator::aggregate;
    use hashbench_core::error::BenchError;
    use hashbench_core::store::ResultsStore;
    use hashbench_core::types::{AlgorithmLabel, ConcurrencyLevel, TrialRecord};

    fn summary() -> AggregatedSummary {
        let level = ConcurrencyLevel::new(2).unwrap();
        let mut store = ResultsStore::new();
        store.merge_trial(vec![
            TrialRecord::sequential("SHA-512".into(), 1.0),
            TrialRecord::parallel("SHA-512".into(), level, 0.6),
        ]);
        let labels: Vec<AlgorithmLabel> = vec!["SHA-512".into()];
        aggregate(&store, &labels, &[level]).unwrap()
    }

    fn run_report() -> RunReport {
        RunReport {
            attempted: 3,
            succeeded: 2,
            records: 4,
            failures: vec![BenchError::ProcessFailure {
                trial: 2,
                status: "exit status: 1".into(),
                stderr: "segfault".into(),
            }],
        }
    }

    #[test]
    fn presenter_modes() {
        let quiet = CLIResultPresenter::new(false, true);
        assert!(quiet.quiet);
        let verbose = CLIResultPresenter::new(true, false);
        assert!(verbose.verbose && !verbose.quiet);
    }

    #[test]
    fn present_summary_does_not_panic() {
        for (verbose, quiet) in [(false, false), (true, false), (false, true)] {
            CLIResultPresenter::new(verbose, quiet).present_summary(&summary());
        }
    }

    #[test]
    fn present_run_does_not_panic() {
        CLIResultPresenter::new(false, false).present_run(&run_report());
        CLIResultPresenter::new(false, true).present_run(&run_report());
        CLIResultPresenter::new(false, false).present_run(&RunReport::default());
    }

    #[test]
    fn present_error_does_not_panic() {
        CLIResultPresenter::new(false, false).present_error("no sequential samples");
    }
}
