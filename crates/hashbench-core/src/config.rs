//! Benchmark configuration: which algorithms and thread counts to track.

use crate::constants::{DEFAULT_ALGORITHMS, DEFAULT_THREAD_COUNTS, DEFAULT_TRIALS};
use crate::error::BenchError;
use crate::types::{AlgorithmLabel, ConcurrencyLevel};

/// Validated set of labels, levels, and trial count for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    algorithms: Vec<AlgorithmLabel>,
    levels: Vec<ConcurrencyLevel>,
    trials: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            algorithms: DEFAULT_ALGORITHMS.iter().map(|&a| a.into()).collect(),
            levels: DEFAULT_THREAD_COUNTS
                .iter()
                .filter_map(|&t| ConcurrencyLevel::new(t))
                .collect(),
            trials: DEFAULT_TRIALS,
        }
    }
}

impl BenchConfig {
    /// Build a configuration from raw values.
    ///
    /// Levels are sorted ascending. Fails on zero trials, an empty label or
    /// level list, blank or duplicate labels, and zero or duplicate levels.
    pub fn new<S: AsRef<str>>(
        algorithms: &[S],
        thread_counts: &[u32],
        trials: usize,
    ) -> Result<Self, BenchError> {
        if trials == 0 {
            return Err(BenchError::Config("trial count must be positive".into()));
        }
        if algorithms.is_empty() {
            return Err(BenchError::Config("no algorithms to track".into()));
        }
        if thread_counts.is_empty() {
            return Err(BenchError::Config("no thread counts to track".into()));
        }

        let mut labels: Vec<AlgorithmLabel> = Vec::with_capacity(algorithms.len());
        for name in algorithms {
            let label = AlgorithmLabel::new(name);
            if label.as_str().is_empty() {
                return Err(BenchError::Config("blank algorithm name".into()));
            }
            if labels.contains(&label) {
                return Err(BenchError::Config(format!("duplicate algorithm: {label}")));
            }
            labels.push(label);
        }

        let mut levels = Vec::with_capacity(thread_counts.len());
        for &threads in thread_counts {
            let level = ConcurrencyLevel::new(threads)
                .ok_or_else(|| BenchError::Config("thread count must be positive".into()))?;
            if levels.contains(&level) {
                return Err(BenchError::Config(format!("duplicate thread count: {level}")));
            }
            levels.push(level);
        }
        levels.sort_unstable();

        Ok(Self {
            algorithms: labels,
            levels,
            trials,
        })
    }

    /// Tracked algorithms in report order.
    #[must_use]
    pub fn algorithms(&self) -> &[AlgorithmLabel] {
        &self.algorithms
    }

    /// Tracked thread counts, ascending.
    #[must_use]
    pub fn levels(&self) -> &[ConcurrencyLevel] {
        &self.levels
    }

    /// Number of trials to run.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Whether `label` is one of the tracked algorithms.
    #[must_use]
    pub fn tracks(&self, label: &str) -> bool {
        self.algorithms.iter().any(|a| a.as_str() == label)
    }
}
