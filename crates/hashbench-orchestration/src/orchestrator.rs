//! Core orchestration: the sequential trial loop.

use std::time::Instant;

use hashbench_core::error::BenchError;
use hashbench_core::parser::ReportParser;
use hashbench_core::store::ResultsStore;

use crate::interfaces::{NullObserver, RunReport, TrialObserver, TrialRunner};

/// Run `trials` trials one after another, merging each parsed report into `store`.
pub fn run_trials(
    runner: &dyn TrialRunner,
    parser: &ReportParser,
    trials: usize,
    store: &mut ResultsStore,
) -> Result<RunReport, BenchError> {
    run_trials_with_observer(runner, parser, trials, store, &NullObserver)
}

/// Run `trials` trials with an observer following each step.
///
/// A trial that fails with a non-fatal error is logged, recorded in the
/// returned report and skipped; the remaining trials still run. A fatal
/// error (the program could not be started, an I/O failure) aborts the
/// loop and is returned as is.
pub fn run_trials_with_observer(
    runner: &dyn TrialRunner,
    parser: &ReportParser,
    trials: usize,
    store: &mut ResultsStore,
    observer: &dyn TrialObserver,
) -> Result<RunReport, BenchError> {
    let mut report = RunReport::default();
    tracing::info!(runner = %runner.describe(), trials, "starting trial loop");

    for trial in 1..=trials {
        observer.on_trial_start(trial, trials);
        report.attempted += 1;
        let start = Instant::now();

        match runner.run_trial(trial) {
            Ok(output) => {
                let records = parser.parse(&output);
                let count = records.len();
                if count == 0 {
                    tracing::warn!(trial, "report contained no timings for tracked algorithms");
                }
                store.merge_trial(records);
                report.succeeded += 1;
                report.records += count;
                tracing::debug!(trial, records = count, elapsed = ?start.elapsed(), "trial merged");
                observer.on_trial_success(trial, count);
            }
            Err(e) if e.is_fatal() => {
                tracing::error!(trial, error = %e, "aborting trial loop");
                return Err(e);
            }
            Err(e) => {
                tracing::warn!(trial, error = %e, "skipping trial");
                observer.on_trial_failure(trial, &e);
                report.failures.push(e);
            }
        }
    }

    observer.on_finish(&report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use hashbench_core::aggregator::aggregate;
    use hashbench_core::config::BenchConfig;
    use hashbench_core::types::{AlgorithmLabel, ConcurrencyLevel};

    /// Runner that returns a fixed report for every trial except those listed.
    struct ScriptedRunner {
        report: String,
        failing: Vec<usize>,
        fatal_at: Option<usize>,
        calls: AtomicUsize,
    }

    impl ScriptedRunner {
        fn new(report: &str) -> Self {
            Self {
                report: report.to_string(),
                failing: Vec::new(),
                fatal_at: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TrialRunner for ScriptedRunner {
        fn run_trial(&self, trial: usize) -> Result<String, BenchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fatal_at == Some(trial) {
                return Err(BenchError::Spawn {
                    program: "./attack".into(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
                });
            }
            if self.failing.contains(&trial) {
                return Err(BenchError::ProcessFailure {
                    trial,
                    status: "exit status: 1".into(),
                    stderr: "boom".into(),
                });
            }
            Ok(self.report.clone())
        }

        fn describe(&self) -> String {
            "scripted".into()
        }
    }

    /// Runner that hands out one canned report per trial.
    struct CannedRunner(Vec<&'static str>);

    impl TrialRunner for CannedRunner {
        fn run_trial(&self, trial: usize) -> Result<String, BenchError> {
            Ok(self.0[trial - 1].to_string())
        }

        fn describe(&self) -> String {
            "canned".into()
        }
    }

    #[derive(Default)]
    struct CountingObserver {
        started: AtomicUsize,
        succeeded: AtomicUsize,
        failed: AtomicUsize,
        finished: AtomicUsize,
    }

    impl TrialObserver for CountingObserver {
        fn on_trial_start(&self, _trial: usize, total: usize) {
            assert_eq!(total, 5);
            self.started.fetch_add(1, Ordering::SeqCst);
        }
        fn on_trial_success(&self, _trial: usize, _records: usize) {
            self.succeeded.fetch_add(1, Ordering::SeqCst);
        }
        fn on_trial_failure(&self, _trial: usize, _error: &BenchError) {
            self.failed.fetch_add(1, Ordering::SeqCst);
        }
        fn on_finish(&self, _report: &RunReport) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    const REPORT: &str = "\
=== Hash Algorithm: MD5 ===
Sequential result: pw, Time: 2.0000s
Parallel (2 threads) result: pw, Time: 1.0000s
==============================
";

    fn md5_parser() -> ReportParser {
        ReportParser::new(&[AlgorithmLabel::new("MD5")])
    }

    fn level(n: u32) -> ConcurrencyLevel {
        ConcurrencyLevel::new(n).unwrap()
    }

    #[test]
    fn failed_trial_is_skipped_and_loop_continues() {
        let mut runner = ScriptedRunner::new(REPORT);
        runner.failing = vec![3];
        let mut store = ResultsStore::new();

        let report = run_trials(&runner, &md5_parser(), 5, &mut store).unwrap();
        assert_eq!(report.attempted, 5);
        assert_eq!(report.succeeded, 4);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.records, 8);
        assert_eq!(store.trials_merged(), 4);

        let labels = vec![AlgorithmLabel::new("MD5")];
        let summary = aggregate(&store, &labels, &[level(2)]).unwrap();
        let md5 = summary.get("MD5").unwrap();
        assert_eq!(md5.sequential_samples, 4);
        assert!((md5.mean_sequential - 2.0).abs() < 1e-12);
    }

    #[test]
    fn fatal_error_stops_the_loop() {
        let mut runner = ScriptedRunner::new(REPORT);
        runner.fatal_at = Some(2);
        let mut store = ResultsStore::new();

        let err = run_trials(&runner, &md5_parser(), 5, &mut store).unwrap_err();
        assert!(matches!(err, BenchError::Spawn { .. }));
        assert_eq!(runner.calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.trials_merged(), 1);
    }

    #[test]
    fn observer_sees_every_event() {
        let mut runner = ScriptedRunner::new(REPORT);
        runner.failing = vec![1, 5];
        let observer = CountingObserver::default();
        let mut store = ResultsStore::new();

        run_trials_with_observer(&runner, &md5_parser(), 5, &mut store, &observer).unwrap();
        assert_eq!(observer.started.load(Ordering::SeqCst), 5);
        assert_eq!(observer.succeeded.load(Ordering::SeqCst), 3);
        assert_eq!(observer.failed.load(Ordering::SeqCst), 2);
        assert_eq!(observer.finished.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn zero_trials_leaves_store_empty() {
        let runner = ScriptedRunner::new(REPORT);
        let mut store = ResultsStore::new();
        let report = run_trials(&runner, &md5_parser(), 0, &mut store).unwrap();
        assert_eq!(report.attempted, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn two_trials_average_into_speedup_and_efficiency() {
        let runner = CannedRunner(vec![
            "=== Hash Algorithm: SHA-256 ===\n\
             Sequential result: pw, Time: 1.0000s\n\
             Parallel (2 threads) result: pw, Time: 1.0000s\n",
            "=== Hash Algorithm: SHA-256 ===\n\
             Sequential result: pw, Time: 3.0000s\n\
             Parallel (2 threads) result: pw, Time: 1.0000s\n",
        ]);
        let config = BenchConfig::new(&["SHA-256"], &[2, 4], 2).unwrap();
        let mut store = ResultsStore::new();

        run_trials(&runner, &ReportParser::for_config(&config), 2, &mut store).unwrap();
        let summary = aggregate(&store, config.algorithms(), config.levels()).unwrap();
        let sha = summary.get("SHA-256").unwrap();

        assert!((sha.mean_sequential - 2.0).abs() < 1e-12);
        let two = sha.level(level(2)).unwrap();
        assert!((two.mean_parallel - 1.0).abs() < 1e-12);
        assert!((two.speedup - 2.0).abs() < 1e-12);
        assert!((two.efficiency - 1.0).abs() < 1e-12);

        let four = sha.level(level(4)).unwrap();
        assert!(!four.has_data());
        assert_eq!(four.speedup, 0.0);
    }
}
