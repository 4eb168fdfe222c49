//! # hashbench-core
//!
//! Core library for hashbench: the attack-report parser, the results store
//! that accumulates timings across trials, and the aggregator that turns
//! those timings into speedup and efficiency figures.

pub mod aggregator;
pub mod config;
pub mod constants;
pub mod error;
pub mod parser;
pub mod store;
pub mod types;

// Re-exports
pub use aggregator::{aggregate, summarize, AggregatedSummary, AlgorithmSummary, LevelStats};
pub use config::BenchConfig;
pub use constants::{exit_codes, DEFAULT_ALGORITHMS, DEFAULT_THREAD_COUNTS, DEFAULT_TRIALS};
pub use error::{BenchError, ParseMismatch};
pub use parser::{ReportLine, ReportParser};
pub use store::ResultsStore;
pub use types::{AlgorithmLabel, ConcurrencyLevel, RunKind, TrialRecord};
