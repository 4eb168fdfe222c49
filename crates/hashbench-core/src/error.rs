//! Error taxonomy for benchmark runs.

/// Errors raised while collecting or aggregating benchmark results.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// The attack program exited with a failure status.
    #[error("trial {trial} failed with {status}: {stderr}")]
    ProcessFailure {
        /// 1-based trial number.
        trial: usize,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// The attack program succeeded but its report is unusable.
    #[error("trial {trial} produced an unusable report: {reason}")]
    InvalidOutput {
        /// 1-based trial number.
        trial: usize,
        /// What was wrong with the output.
        reason: String,
    },

    /// The attack program could not be started at all.
    #[error("failed to start {program}: {source}")]
    Spawn {
        /// Program path as configured.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// An expected algorithm has no sequential samples.
    #[error("no sequential samples recorded for {algorithm}")]
    EmptySample {
        /// Label of the algorithm without a baseline.
        algorithm: String,
    },

    /// Invalid benchmark configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem error while persisting or loading reports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Whether this error must stop the trial loop rather than skip a trial.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Spawn { .. } | Self::Io(_))
    }
}

/// Why a single report line did not yield a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMismatch {
    /// The line matches none of the known patterns.
    #[error("unrecognized line")]
    Unrecognized,

    /// The elapsed-time token is missing or not a non-negative decimal.
    #[error("malformed time token: {0:?}")]
    MalformedTime(String),

    /// The thread count is missing, zero, or not an integer.
    #[error("malformed thread count: {0:?}")]
    MalformedLevel(String),
}
