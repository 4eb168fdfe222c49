//! Accumulator for timings collected across trials.

use std::collections::BTreeMap;

use crate::types::{AlgorithmLabel, ConcurrencyLevel, RunKind, TrialRecord};

/// Samples collected for one algorithm.
#[derive(Debug, Clone, Default, PartialEq)]
struct AlgorithmSamples {
    sequential: Vec<f64>,
    parallel: BTreeMap<ConcurrencyLevel, Vec<f64>>,
}

/// Append-only store of every timing merged during a run.
///
/// The orchestrator is its only writer; the aggregator reads it once all
/// trials are done.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsStore {
    samples: BTreeMap<AlgorithmLabel, AlgorithmSamples>,
    trials_merged: usize,
    records: usize,
}

impl ResultsStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single record.
    pub fn record(&mut self, record: TrialRecord) {
        let entry = self.samples.entry(record.algorithm).or_default();
        match record.kind {
            RunKind::Sequential => entry.sequential.push(record.seconds),
            RunKind::Parallel(level) => entry.parallel.entry(level).or_default().push(record.seconds),
        }
        self.records += 1;
    }

    /// Merge all records produced by one successful trial.
    pub fn merge_trial(&mut self, records: impl IntoIterator<Item = TrialRecord>) {
        for record in records {
            self.record(record);
        }
        self.trials_merged += 1;
    }

    /// Sequential timings for `algorithm`, in merge order.
    #[must_use]
    pub fn sequential(&self, algorithm: &AlgorithmLabel) -> &[f64] {
        self.samples
            .get(algorithm)
            .map(|s| s.sequential.as_slice())
            .unwrap_or_default()
    }

    /// Parallel timings for `algorithm` at `level`, in merge order.
    #[must_use]
    pub fn parallel(&self, algorithm: &AlgorithmLabel, level: ConcurrencyLevel) -> &[f64] {
        self.samples
            .get(algorithm)
            .and_then(|s| s.parallel.get(&level))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of trials merged so far.
    #[must_use]
    pub fn trials_merged(&self) -> usize {
        self.trials_merged
    }

    /// Total number of records merged so far.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Whether no record has been merged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}
