//! Report formatting and JSON export.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use serde::Serialize;

use hashbench_core::aggregator::{AggregatedSummary, AlgorithmSummary, LevelStats};
use hashbench_orchestration::interfaces::RunReport;

const NOT_AVAILABLE: &str = "n/a";
const UNBOUNDED: &str = "inf";

/// Format the sequential baseline line of an algorithm block.
#[must_use]
pub fn format_sequential(summary: &AlgorithmSummary) -> String {
    format!("Avg Sequential Time: {:.4}s", summary.mean_sequential)
}

/// Format one thread-count line. Levels without samples print `n/a`; a
/// measured zero parallel time prints `inf` ratios.
#[must_use]
pub fn format_level(stats: &LevelStats) -> String {
    if stats.has_speedup() {
        format!(
            "Threads: {}, Avg Parallel: {:.4}s, Speedup: {:.2}, Efficiency: {:.2}",
            stats.level, stats.mean_parallel, stats.speedup, stats.efficiency
        )
    } else if stats.has_data() {
        format!(
            "Threads: {}, Avg Parallel: {:.4}s, Speedup: {UNBOUNDED}, Efficiency: {UNBOUNDED}",
            stats.level, stats.mean_parallel
        )
    } else {
        format!(
            "Threads: {}, Avg Parallel: {NOT_AVAILABLE}, Speedup: {NOT_AVAILABLE}, Efficiency: {NOT_AVAILABLE}",
            stats.level
        )
    }
}

/// Plain-text report for every algorithm, headers included.
#[must_use]
pub fn format_report(summary: &AggregatedSummary) -> String {
    let mut out = String::new();
    for (i, algo) in summary.algorithms.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "=== {} ===", algo.algorithm);
        let _ = writeln!(out, "{}", format_sequential(algo));
        for stats in &algo.levels {
            let _ = writeln!(out, "{}", format_level(stats));
        }
    }
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.0}s")
    }
}

#[derive(Serialize)]
struct JsonExport<'a> {
    run: &'a RunReport,
    summary: &'a AggregatedSummary,
}

/// Write the summary and trial counts to `path` as pretty JSON.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_json_summary(
    path: &Path,
    summary: &AggregatedSummary,
    run: &RunReport,
) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    serde_json::to_writer_pretty(&mut file, &JsonExport { run, summary })?;
    writeln!(file)?;
    file.flush()?;
    tracing::info!(path = %path.display(), "wrote JSON summary");
    Ok(())
}
