//! Fixed benchmark configuration and exit codes.

/// Hash algorithms tracked by default, in report order.
pub const DEFAULT_ALGORITHMS: [&str; 4] = ["SHA-1", "SHA-256", "SHA-512", "MD5"];

/// Thread counts tracked by default, in ascending order.
pub const DEFAULT_THREAD_COUNTS: [u32; 5] = [1, 2, 4, 8, 16];

/// Number of times the attack program is run by default.
pub const DEFAULT_TRIALS: usize = 10;

/// Attack program invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "./attack";

/// Prefix of the line that opens an algorithm block.
pub const HEADER_PREFIX: &str = "=== Hash Algorithm:";

/// Prefix of a sequential timing line.
pub const SEQUENTIAL_PREFIX: &str = "Sequential result:";

/// Prefix of a parallel timing line, followed by the thread count.
pub const PARALLEL_PREFIX: &str = "Parallel (";

/// Text between the thread count and the rest of a parallel timing line.
pub const PARALLEL_INFIX: &str = " threads) result:";

/// Marker preceding the elapsed-time token on result lines.
pub const TIME_MARKER: &str = "Time:";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// An expected algorithm produced no sequential baseline.
    pub const ERROR_EMPTY_SAMPLE: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// The attack program could not be started.
    pub const ERROR_SPAWN: i32 = 5;
}
