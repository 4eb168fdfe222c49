//! Reduction of collected timings into speedup and efficiency figures.

use serde::{Deserialize, Serialize};

use crate::error::BenchError;
use crate::store::ResultsStore;
use crate::types::{AlgorithmLabel, ConcurrencyLevel};

/// Averages for one algorithm at one thread count.
///
/// A level is in one of three states:
///
/// - no parallel sample: `samples` is zero and the three figures are all
///   exactly `0.0`. That is a "no data" marker, not a measurement; use
///   [`LevelStats::has_data`] to tell it apart.
/// - measured, mean parallel time above zero: the figures are the usual
///   ratios.
/// - measured, mean parallel time exactly zero: the ratios are unbounded.
///   `speedup` and `efficiency` stay `0.0` so the summary remains valid
///   JSON, and [`LevelStats::has_speedup`] returns false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Thread count.
    pub level: ConcurrencyLevel,
    /// Mean parallel time in seconds.
    pub mean_parallel: f64,
    /// Mean sequential time divided by mean parallel time.
    pub speedup: f64,
    /// Speedup divided by thread count.
    pub efficiency: f64,
    /// Number of parallel samples averaged.
    pub samples: usize,
}

impl LevelStats {
    /// The "no data" entry for `level`.
    #[must_use]
    pub fn no_data(level: ConcurrencyLevel) -> Self {
        Self {
            level,
            mean_parallel: 0.0,
            speedup: 0.0,
            efficiency: 0.0,
            samples: 0,
        }
    }

    /// Whether at least one parallel sample backs these figures.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.samples > 0
    }

    /// Whether `speedup` and `efficiency` are finite measured ratios.
    ///
    /// False for the "no data" marker and for a measured zero mean parallel
    /// time, where the ratios would be infinite.
    #[must_use]
    pub fn has_speedup(&self) -> bool {
        self.has_data() && self.mean_parallel > 0.0
    }
}

/// Aggregated figures for one algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmSummary {
    /// Algorithm these figures belong to.
    pub algorithm: AlgorithmLabel,
    /// Mean sequential time in seconds.
    pub mean_sequential: f64,
    /// Number of sequential samples averaged.
    pub sequential_samples: usize,
    /// One entry per tracked level, in level order.
    pub levels: Vec<LevelStats>,
}

impl AlgorithmSummary {
    /// Stats for a specific thread count.
    #[must_use]
    pub fn level(&self, level: ConcurrencyLevel) -> Option<&LevelStats> {
        self.levels.iter().find(|s| s.level == level)
    }
}

/// Aggregated figures for every tracked algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedSummary {
    /// Tracked thread counts; the shared x-axis of every chart.
    pub levels: Vec<ConcurrencyLevel>,
    /// One entry per tracked algorithm, in configured order.
    pub algorithms: Vec<AlgorithmSummary>,
}

impl AggregatedSummary {
    /// Summary for the algorithm named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AlgorithmSummary> {
        self.algorithms.iter().find(|a| a.algorithm.as_str() == name)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Aggregate the timings of a single algorithm.
///
/// Fails with [`BenchError::EmptySample`] if the algorithm has no
/// sequential baseline.
pub fn summarize(
    store: &ResultsStore,
    algorithm: &AlgorithmLabel,
    levels: &[ConcurrencyLevel],
) -> Result<AlgorithmSummary, BenchError> {
    let sequential = store.sequential(algorithm);
    let mean_sequential = mean(sequential).ok_or_else(|| BenchError::EmptySample {
        algorithm: algorithm.to_string(),
    })?;

    let levels = levels
        .iter()
        .map(|&level| {
            let samples = store.parallel(algorithm, level);
            let Some(mean_parallel) = mean(samples) else {
                return LevelStats::no_data(level);
            };
            let (speedup, efficiency) = if mean_parallel > 0.0 {
                let speedup = mean_sequential / mean_parallel;
                (speedup, speedup / f64::from(level.get()))
            } else {
                tracing::warn!(%algorithm, %level, "mean parallel time is zero, speedup undefined");
                (0.0, 0.0)
            };
            LevelStats {
                level,
                mean_parallel,
                speedup,
                efficiency,
                samples: samples.len(),
            }
        })
        .collect();

    Ok(AlgorithmSummary {
        algorithm: algorithm.clone(),
        mean_sequential,
        sequential_samples: sequential.len(),
        levels,
    })
}

/// Aggregate every tracked algorithm. Pure: reads the store, no I/O.
///
/// Stops at the first algorithm without a sequential baseline.
pub fn aggregate(
    store: &ResultsStore,
    algorithms: &[AlgorithmLabel],
    levels: &[ConcurrencyLevel],
) -> Result<AggregatedSummary, BenchError> {
    let algorithms = algorithms
        .iter()
        .map(|algorithm| summarize(store, algorithm, levels))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AggregatedSummary {
        levels: levels.to_vec(),
        algorithms,
    })
}
