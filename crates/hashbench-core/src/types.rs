//! Measurement data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a hash algorithm under test, e.g. `SHA-256`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmLabel(String);

impl AlgorithmLabel {
    /// Create a label, trimming surrounding whitespace.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// The label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlgorithmLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlgorithmLabel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Number of worker threads used by a parallel run. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ConcurrencyLevel(u32);

impl ConcurrencyLevel {
    /// Create a level; `None` for zero.
    #[must_use]
    pub fn new(threads: u32) -> Option<Self> {
        (threads > 0).then_some(Self(threads))
    }

    /// Thread count.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ConcurrencyLevel {
    type Error = String;

    fn try_from(threads: u32) -> Result<Self, Self::Error> {
        Self::new(threads).ok_or_else(|| "concurrency level must be positive".to_string())
    }
}

impl From<ConcurrencyLevel> for u32 {
    fn from(level: ConcurrencyLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ConcurrencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a timing was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunKind {
    /// Single-threaded baseline.
    Sequential,
    /// Run with the given number of worker threads.
    Parallel(ConcurrencyLevel),
}

/// One timing extracted from a trial report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    /// Algorithm the timing belongs to.
    pub algorithm: AlgorithmLabel,
    /// Sequential or parallel.
    pub kind: RunKind,
    /// Elapsed wall-clock time in seconds.
    pub seconds: f64,
}

impl TrialRecord {
    /// Create a sequential record.
    #[must_use]
    pub fn sequential(algorithm: AlgorithmLabel, seconds: f64) -> Self {
        Self {
            algorithm,
            kind: RunKind::Sequential,
            seconds,
        }
    }

    /// Create a parallel record.
    #[must_use]
    pub fn parallel(algorithm: AlgorithmLabel, level: ConcurrencyLevel, seconds: f64) -> Self {
        Self {
            algorithm,
            kind: RunKind::Parallel(level),
            seconds,
        }
    }
}
