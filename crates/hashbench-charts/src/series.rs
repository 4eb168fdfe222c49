//! Plot data extracted from an aggregated summary.

use hashbench_core::aggregator::{AggregatedSummary, AlgorithmSummary, LevelStats};

/// The three charts produced for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Time,
    Speedup,
    Efficiency,
}

impl ChartKind {
    /// Every chart, in display order.
    pub const ALL: [ChartKind; 3] = [ChartKind::Time, ChartKind::Speedup, ChartKind::Efficiency];

    /// Short name, used for tabs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Time => "Execution Time",
            ChartKind::Speedup => "Speedup",
            ChartKind::Efficiency => "Efficiency",
        }
    }

    /// Chart caption.
    #[must_use]
    pub fn title(self, trials: usize) -> String {
        format!("{} vs Thread Count (Avg of {trials} Runs)", self.name())
    }

    #[must_use]
    pub fn x_desc(self) -> &'static str {
        "Number of Threads"
    }

    #[must_use]
    pub fn y_desc(self) -> &'static str {
        match self {
            ChartKind::Time => "Time (seconds)",
            ChartKind::Speedup => "Speedup",
            ChartKind::Efficiency => "Efficiency",
        }
    }

    /// Output file name without extension.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Time => "time_vs_threads",
            ChartKind::Speedup => "speedup_vs_threads",
            ChartKind::Efficiency => "efficiency_vs_threads",
        }
    }

    fn value(self, stats: &LevelStats) -> f64 {
        match self {
            ChartKind::Time => stats.mean_parallel,
            ChartKind::Speedup => stats.speedup,
            ChartKind::Efficiency => stats.efficiency,
        }
    }
}

/// One line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    /// Index of the algorithm in the summary; picks the color.
    pub algorithm_index: usize,
    /// `(threads, value)` points in ascending thread order.
    pub points: Vec<(f64, f64)>,
    /// Horizontal sequential baseline rather than a measured curve.
    pub reference: bool,
}

/// Lines for `kind`, one per algorithm plus, on the time chart, a
/// sequential baseline per algorithm.
///
/// Levels without parallel samples are left out rather than drawn at zero.
/// Speedup and efficiency also leave out levels whose mean parallel time is
/// zero, where the ratios are unbounded.
#[must_use]
pub fn series(summary: &AggregatedSummary, kind: ChartKind) -> Vec<Series> {
    let mut out = Vec::new();
    for (index, algo) in summary.algorithms.iter().enumerate() {
        let label = match kind {
            ChartKind::Time => format!("{} Parallel", algo.algorithm),
            _ => algo.algorithm.to_string(),
        };
        out.push(Series {
            label,
            algorithm_index: index,
            points: measured_points(algo, kind),
            reference: false,
        });

        if kind == ChartKind::Time {
            if let Some((lo, hi)) = level_span(summary) {
                out.push(Series {
                    label: format!("{} Sequential", algo.algorithm),
                    algorithm_index: index,
                    points: vec![(lo, algo.mean_sequential), (hi, algo.mean_sequential)],
                    reference: true,
                });
            }
        }
    }
    out
}

fn measured_points(algo: &AlgorithmSummary, kind: ChartKind) -> Vec<(f64, f64)> {
    algo.levels
        .iter()
        .filter(|stats| match kind {
            ChartKind::Time => stats.has_data(),
            ChartKind::Speedup | ChartKind::Efficiency => stats.has_speedup(),
        })
        .map(|stats| (f64::from(stats.level.get()), kind.value(stats)))
        .collect()
}

fn level_span(summary: &AggregatedSummary) -> Option<(f64, f64)> {
    let lo = summary.levels.iter().min()?;
    let hi = summary.levels.iter().max()?;
    Some((f64::from(lo.get()), f64::from(hi.get())))
}

/// X-axis range covering every tracked level, never empty.
#[must_use]
pub fn x_bounds(summary: &AggregatedSummary) -> (f64, f64) {
    match level_span(summary) {
        Some((lo, hi)) if hi > lo => (lo, hi),
        Some((lo, _)) => (lo - 1.0, lo + 1.0),
        None => (0.0, 1.0),
    }
}

/// Y-axis range from zero to a little above the largest value, never empty.
#[must_use]
pub fn y_bounds(series: &[Series]) -> (f64, f64) {
    let max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(_, y)| y))
        .filter(|y| y.is_finite())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        (0.0, max * 1.1)
    } else {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbench_core::aggregator::aggregate;
    use hashbench_core::store::ResultsStore;
    use hashbench_core::types::{AlgorithmLabel, ConcurrencyLevel, TrialRecord};

    fn level(n: u32) -> ConcurrencyLevel {
        ConcurrencyLevel::new(n).unwrap()
    }

    fn summary() -> AggregatedSummary {
        let mut store = ResultsStore::new();
        store.merge_trial(vec![
            TrialRecord::sequential("SHA-1".into(), 4.0),
            TrialRecord::parallel("SHA-1".into(), level(1), 4.0),
            TrialRecord::parallel("SHA-1".into(), level(4), 1.0),
            TrialRecord::sequential("MD5".into(), 2.0),
            TrialRecord::parallel("MD5".into(), level(2), 1.0),
        ]);
        let labels: Vec<AlgorithmLabel> = vec!["SHA-1".into(), "MD5".into()];
        aggregate(&store, &labels, &[level(1), level(2), level(4)]).unwrap()
    }

    #[test]
    fn file_stems_and_titles() {
        assert_eq!(ChartKind::Time.file_stem(), "time_vs_threads");
        assert_eq!(ChartKind::Speedup.file_stem(), "speedup_vs_threads");
        assert_eq!(ChartKind::Efficiency.file_stem(), "efficiency_vs_threads");
        assert_eq!(
            ChartKind::Time.title(10),
            "Execution Time vs Thread Count (Avg of 10 Runs)"
        );
        assert_eq!(ChartKind::Efficiency.x_desc(), "Number of Threads");
    }

    #[test]
    fn time_chart_has_parallel_and_sequential_lines() {
        let lines = series(&summary(), ChartKind::Time);
        let labels: Vec<&str> = lines.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            ["SHA-1 Parallel", "SHA-1 Sequential", "MD5 Parallel", "MD5 Sequential"]
        );
        assert_eq!(lines[0].points, vec![(1.0, 4.0), (4.0, 1.0)]);
        assert!(lines[1].reference);
        assert_eq!(lines[1].points, vec![(1.0, 4.0), (4.0, 4.0)]);
        assert_eq!(lines[3].algorithm_index, 1);
    }

    #[test]
    fn levels_without_data_are_omitted() {
        let lines = series(&summary(), ChartKind::Speedup);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].points, vec![(1.0, 1.0), (4.0, 4.0)]);
        assert_eq!(lines[1].points, vec![(2.0, 2.0)]);
    }

    #[test]
    fn zero_parallel_time_is_plotted_only_on_time_chart() {
        let mut store = ResultsStore::new();
        store.merge_trial(vec![
            TrialRecord::sequential("MD5".into(), 2.0),
            TrialRecord::parallel("MD5".into(), level(1), 2.0),
            TrialRecord::parallel("MD5".into(), level(2), 0.0),
        ]);
        let labels: Vec<AlgorithmLabel> = vec!["MD5".into()];
        let s = aggregate(&store, &labels, &[level(1), level(2)]).unwrap();

        assert_eq!(
            series(&s, ChartKind::Time)[0].points,
            vec![(1.0, 2.0), (2.0, 0.0)]
        );
        assert_eq!(series(&s, ChartKind::Speedup)[0].points, vec![(1.0, 1.0)]);
        assert_eq!(series(&s, ChartKind::Efficiency)[0].points, vec![(1.0, 1.0)]);
    }

    #[test]
    fn efficiency_points() {
        let lines = series(&summary(), ChartKind::Efficiency);
        assert_eq!(lines[0].points, vec![(1.0, 1.0), (4.0, 1.0)]);
        assert_eq!(lines[1].points, vec![(2.0, 1.0)]);
    }

    #[test]
    fn bounds_are_never_empty() {
        let s = summary();
        assert_eq!(x_bounds(&s), (1.0, 4.0));
        let (lo, hi) = y_bounds(&series(&s, ChartKind::Time));
        assert_eq!(lo, 0.0);
        assert!((hi - 4.4).abs() < 1e-9);

        let single = AggregatedSummary {
            levels: vec![level(8)],
            algorithms: vec![],
        };
        assert_eq!(x_bounds(&single), (7.0, 9.0));
        assert_eq!(y_bounds(&[]), (0.0, 1.0));
    }
}
