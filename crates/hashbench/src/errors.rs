//! Error handling and exit codes.

use hashbench_core::constants::exit_codes;
use hashbench_core::error::BenchError;

/// Exit code for a benchmark error.
#[must_use]
pub fn handle_error(err: &BenchError) -> i32 {
    match err {
        BenchError::EmptySample { .. } => exit_codes::ERROR_EMPTY_SAMPLE,
        BenchError::Config(_) => exit_codes::ERROR_CONFIG,
        BenchError::Spawn { .. } => exit_codes::ERROR_SPAWN,
        BenchError::ProcessFailure { .. } | BenchError::InvalidOutput { .. } | BenchError::Io(_) => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Exit code for any error reaching `main`, looking through added context.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<BenchError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
