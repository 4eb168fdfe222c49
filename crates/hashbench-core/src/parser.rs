//! Attack-report parser.
//!
//! A report is a sequence of algorithm blocks:
//!
//! ```text
//! === Hash Algorithm: SHA-256 ===
//! Target hash: 5e88...
//! Sequential result: password, Time: 0.8123s
//! Parallel (2 threads) result: password, Time: 0.4410s
//! Parallel (4 threads) result: password, Time: 0.2307s
//! ==============================
//! ```
//!
//! Result lines carry no algorithm name of their own. They belong to the
//! closest header above them, so the parser scans top to bottom keeping the
//! current algorithm as its only state. Headers naming an algorithm outside
//! the tracked set clear that state, and result lines are dropped until the
//! next tracked header. Lines that match nothing, and result lines with a
//! malformed time or thread count, are skipped without failing the report.
//!
//! Times must be plain decimals (`0.000052s`). Scientific notation such as
//! `5.23e-05s`, which a default-formatted C++ double prints for very short
//! runs, is rejected like any other malformed token. Such samples are lost
//! and the affected means skew upward; the attack program is expected to
//! print fixed-point times.

use crate::config::BenchConfig;
use crate::constants::{
    HEADER_PREFIX, PARALLEL_INFIX, PARALLEL_PREFIX, SEQUENTIAL_PREFIX, TIME_MARKER,
};
use crate::error::ParseMismatch;
use crate::types::{AlgorithmLabel, ConcurrencyLevel, TrialRecord};

/// A recognized report line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportLine {
    /// Start of an algorithm block.
    Header(String),
    /// Sequential timing in seconds.
    Sequential(f64),
    /// Parallel timing in seconds at a thread count.
    Parallel {
        level: ConcurrencyLevel,
        seconds: f64,
    },
}

/// Classify a single report line.
pub fn parse_line(line: &str) -> Result<ReportLine, ParseMismatch> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix(HEADER_PREFIX) {
        let name = rest.trim();
        let name = name.strip_suffix("===").unwrap_or(name).trim();
        return Ok(ReportLine::Header(name.to_string()));
    }

    if let Some(rest) = line.strip_prefix(SEQUENTIAL_PREFIX) {
        return parse_time(rest).map(ReportLine::Sequential);
    }

    if let Some(rest) = line.strip_prefix(PARALLEL_PREFIX) {
        let Some((count, tail)) = rest.split_once(PARALLEL_INFIX) else {
            return Err(ParseMismatch::Unrecognized);
        };
        let level = count
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(ConcurrencyLevel::new)
            .ok_or_else(|| ParseMismatch::MalformedLevel(count.to_string()))?;
        let seconds = parse_time(tail)?;
        return Ok(ReportLine::Parallel { level, seconds });
    }

    Err(ParseMismatch::Unrecognized)
}

/// Extract the `<decimal>s` token after the last `Time:` marker.
fn parse_time(text: &str) -> Result<f64, ParseMismatch> {
    let malformed = || ParseMismatch::MalformedTime(text.trim().to_string());

    let (_, after) = text.rsplit_once(TIME_MARKER).ok_or_else(malformed)?;
    let token = after.split_whitespace().next().ok_or_else(malformed)?;
    let digits = token.strip_suffix('s').ok_or_else(malformed)?;

    if !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        || !digits.bytes().any(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }
    match digits.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => Ok(seconds),
        _ => Err(malformed()),
    }
}

/// Turns one trial's stdout into timing records for the tracked algorithms.
#[derive(Debug, Clone)]
pub struct ReportParser {
    algorithms: Vec<AlgorithmLabel>,
}

impl ReportParser {
    /// Create a parser that keeps records for the given algorithms only.
    #[must_use]
    pub fn new(algorithms: &[AlgorithmLabel]) -> Self {
        Self {
            algorithms: algorithms.to_vec(),
        }
    }

    /// Create a parser for the algorithms tracked by `config`.
    #[must_use]
    pub fn for_config(config: &BenchConfig) -> Self {
        Self::new(config.algorithms())
    }

    /// Parse a full report. Never fails; unusable lines are skipped.
    #[must_use]
    pub fn parse(&self, report: &str) -> Vec<TrialRecord> {
        let mut records = Vec::new();
        let mut current: Option<&AlgorithmLabel> = None;

        for (index, line) in report.lines().enumerate() {
            match parse_line(line) {
                Ok(ReportLine::Header(name)) => {
                    current = self.algorithms.iter().find(|a| a.as_str() == name);
                    if current.is_none() {
                        tracing::debug!(line = index + 1, algorithm = %name, "ignoring untracked algorithm block");
                    }
                }
                Ok(ReportLine::Sequential(seconds)) => {
                    if let Some(algorithm) = current {
                        records.push(TrialRecord::sequential(algorithm.clone(), seconds));
                    }
                }
                Ok(ReportLine::Parallel { level, seconds }) => {
                    if let Some(algorithm) = current {
                        records.push(TrialRecord::parallel(algorithm.clone(), level, seconds));
                    }
                }
                Err(ParseMismatch::Unrecognized) => {}
                Err(e) => {
                    tracing::debug!(line = index + 1, error = %e, "dropping malformed report line");
                }
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RunKind;

    fn level(n: u32) -> ConcurrencyLevel {
        ConcurrencyLevel::new(n).unwrap()
    }

    fn parser() -> ReportParser {
        ReportParser::for_config(&BenchConfig::default())
    }

    const REPORT: &str = "\
Randomly selected password: sunshine

=== Hash Algorithm: SHA-1 ===
Target hash: 8d6e34f987851aa599257d3831a1af040886842f
Sequential result: sunshine, Time: 0.5000s
Parallel (1 threads) result: sunshine, Time: 0.5200s
Parallel (2 threads) result: sunshine, Time: 0.2600s
==============================

=== Hash Algorithm: MD5 ===
Target hash: 0571749e2ac330a7455809c6b0e7af90
Sequential result: sunshine, Time: 0.3000s
Parallel (2 threads) result: sunshine, Time: 0.1500s
==============================
";

    #[test]
    fn header_line() {
        assert_eq!(
            parse_line("=== Hash Algorithm: SHA-256 ==="),
            Ok(ReportLine::Header("SHA-256".into()))
        );
        assert_eq!(
            parse_line("=== Hash Algorithm: MD5"),
            Ok(ReportLine::Header("MD5".into()))
        );
    }

    #[test]
    fn sequential_line() {
        assert_eq!(
            parse_line("Sequential result: hunter2, Time: 1.25s"),
            Ok(ReportLine::Sequential(1.25))
        );
    }

    #[test]
    fn parallel_line() {
        assert_eq!(
            parse_line("Parallel (16 threads) result: hunter2, Time: 0.031s"),
            Ok(ReportLine::Parallel {
                level: level(16),
                seconds: 0.031
            })
        );
    }

    #[test]
    fn not_found_result_still_has_time() {
        assert_eq!(
            parse_line("Sequential result: , Time: 2.0s"),
            Ok(ReportLine::Sequential(2.0))
        );
    }

    #[test]
    fn unrecognized_lines() {
        for line in [
            "",
            "Target hash: abc",
            "==============================",
            "Randomly selected password: x",
            "Parallel result: x, Time: 1s",
        ] {
            assert_eq!(parse_line(line), Err(ParseMismatch::Unrecognized), "{line:?}");
        }
    }

    #[test]
    fn malformed_time_tokens() {
        for line in [
            "Sequential result: x, Time: abcs",
            "Sequential result: x, Time: 1.5",
            "Sequential result: x, Time: -1.5s",
            "Sequential result: x, Time: .s",
            "Sequential result: x, Time: 1.2.3s",
            "Sequential result: x, Time: 1e3s",
            "Sequential result: x",
            "Sequential result: x, Time:",
        ] {
            assert!(
                matches!(parse_line(line), Err(ParseMismatch::MalformedTime(_))),
                "{line:?}"
            );
        }

        let overflow = format!("Sequential result: x, Time: {}s", "9".repeat(400));
        assert!(matches!(
            parse_line(&overflow),
            Err(ParseMismatch::MalformedTime(_))
        ));
    }

    #[test]
    fn malformed_thread_counts() {
        for line in [
            "Parallel (0 threads) result: x, Time: 1.0s",
            "Parallel (many threads) result: x, Time: 1.0s",
            "Parallel (-2 threads) result: x, Time: 1.0s",
        ] {
            assert!(
                matches!(parse_line(line), Err(ParseMismatch::MalformedLevel(_))),
                "{line:?}"
            );
        }
    }

    #[test]
    fn scientific_notation_time_is_dropped() {
        assert_eq!(
            parse_line("Parallel (16 threads) result: x, Time: 5.23e-05s"),
            Err(ParseMismatch::MalformedTime("x, Time: 5.23e-05s".into()))
        );
        assert!(matches!(
            parse_line("Sequential result: x, Time: 1E3s"),
            Err(ParseMismatch::MalformedTime(_))
        ));
    }

    #[test]
    fn time_token_followed_by_text() {
        assert_eq!(
            parse_line("Sequential result: x, Time: 0.75s (cached)"),
            Ok(ReportLine::Sequential(0.75))
        );
    }

    #[test]
    fn parses_full_report() {
        let records = parser().parse(REPORT);
        assert_eq!(records.len(), 5);

        assert_eq!(records[0], TrialRecord::sequential("SHA-1".into(), 0.5));
        assert_eq!(records[1], TrialRecord::parallel("SHA-1".into(), level(1), 0.52));
        assert_eq!(records[2], TrialRecord::parallel("SHA-1".into(), level(2), 0.26));
        assert_eq!(records[3], TrialRecord::sequential("MD5".into(), 0.3));
        assert_eq!(records[4], TrialRecord::parallel("MD5".into(), level(2), 0.15));
    }

    #[test]
    fn parsing_is_idempotent() {
        let p = parser();
        assert_eq!(p.parse(REPORT), p.parse(REPORT));
    }

    #[test]
    fn parallel_lines_follow_preceding_header() {
        let report = "\
=== Hash Algorithm: SHA-512 ===
Parallel (4 threads) result: x, Time: 1.0s
=== Hash Algorithm: SHA-1 ===
Parallel (4 threads) result: x, Time: 2.0s
";
        let records = parser().parse(report);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].algorithm.as_str(), "SHA-512");
        assert!((records[0].seconds - 1.0).abs() < f64::EPSILON);
        assert_eq!(records[1].algorithm.as_str(), "SHA-1");
        assert!((records[1].seconds - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blocks_out_of_configured_order_match_by_name() {
        let report = "\
=== Hash Algorithm: MD5 ===
Sequential result: x, Time: 3.0s
Parallel (2 threads) result: x, Time: 1.5s
=== Hash Algorithm: SHA-1 ===
Sequential result: x, Time: 4.0s
";
        let records = parser().parse(report);
        assert_eq!(records[0].algorithm.as_str(), "MD5");
        assert_eq!(records[1].algorithm.as_str(), "MD5");
        assert_eq!(records[1].kind, RunKind::Parallel(level(2)));
        assert_eq!(records[2].algorithm.as_str(), "SHA-1");
    }

    #[test]
    fn corrupted_token_drops_only_that_line() {
        let report = REPORT.replace("Time: 0.2600s", "Time: 0.2#00s");
        let records = parser().parse(&report);
        assert_eq!(records.len(), 4);
        assert!(!records
            .iter()
            .any(|r| r.kind == RunKind::Parallel(level(2)) && r.algorithm.as_str() == "SHA-1"));
        assert!(records
            .iter()
            .any(|r| r.kind == RunKind::Parallel(level(2)) && r.algorithm.as_str() == "MD5"));
    }

    #[test]
    fn untracked_block_is_dropped_entirely() {
        let report = "\
=== Hash Algorithm: BLAKE3 ===
Sequential result: x, Time: 0.1s
Parallel (2 threads) result: x, Time: 0.05s
=== Hash Algorithm: MD5 ===
Sequential result: x, Time: 0.3s
";
        let records = parser().parse(report);
        assert_eq!(records, vec![TrialRecord::sequential("MD5".into(), 0.3)]);
    }

    #[test]
    fn results_before_any_header_are_dropped() {
        let report = "\
Sequential result: x, Time: 9.0s
=== Hash Algorithm: MD5 ===
Sequential result: x, Time: 0.3s
";
        assert_eq!(parser().parse(report).len(), 1);
    }

    #[test]
    fn label_match_is_exact() {
        let report = "\
=== Hash Algorithm: sha-1 ===
Sequential result: x, Time: 0.3s
";
        assert!(parser().parse(report).is_empty());
    }

    #[test]
    fn empty_report() {
        assert!(parser().parse("").is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let report = REPORT.replace('\n', "\r\n");
        assert_eq!(parser().parse(&report), parser().parse(REPORT));
    }
}
