//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use hashbench_charts::ChartFormat;
use hashbench_core::config::BenchConfig;
use hashbench_core::constants::{
    DEFAULT_ALGORITHMS, DEFAULT_PROGRAM, DEFAULT_THREAD_COUNTS, DEFAULT_TRIALS,
};
use hashbench_core::error::BenchError;

/// Runs a hash-cracking benchmark several times and reports the average
/// speedup and efficiency of each algorithm per thread count.
#[derive(Parser, Debug)]
#[command(name = "hashbench", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Attack program to run once per trial.
    #[arg(long, default_value = DEFAULT_PROGRAM, env = "HASHBENCH_PROGRAM")]
    pub program: PathBuf,

    /// Extra argument for the attack program (repeatable).
    #[arg(long = "program-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub program_args: Vec<String>,

    /// Directory to run the attack program from.
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// Number of trials to run.
    #[arg(short, long, default_value_t = DEFAULT_TRIALS, env = "HASHBENCH_TRIALS")]
    pub trials: usize,

    /// Hash algorithms to track, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_ALGORITHMS.map(String::from))]
    pub algorithms: Vec<String>,

    /// Thread counts to track, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_THREAD_COUNTS)]
    pub threads: Vec<u32>,

    /// Directory the chart files are written to.
    #[arg(short, long, default_value = "charts", env = "HASHBENCH_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Chart file format: png or svg.
    #[arg(long, default_value = "png")]
    pub format: ChartFormat,

    /// Skip writing chart files.
    #[arg(long)]
    pub no_charts: bool,

    /// Browse the charts in an interactive terminal viewer.
    #[arg(long)]
    pub tui: bool,

    /// Also write the aggregated figures as JSON to this file.
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Save each trial's raw report into this directory.
    #[arg(long, value_name = "DIR")]
    pub save_reports: Option<PathBuf>,

    /// Replay saved reports from this directory instead of running the program.
    #[arg(long, value_name = "DIR", conflicts_with = "save_reports")]
    pub replay: Option<PathBuf>,

    /// Quiet mode (report only, no progress or status lines).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validated algorithms, thread counts, and trial count.
    pub fn bench_config(&self) -> Result<BenchConfig, BenchError> {
        BenchConfig::new(&self.algorithms, &self.threads, self.trials)
    }
}
