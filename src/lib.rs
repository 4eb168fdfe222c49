//! Fixture locations shared by the workspace-level tests.

use std::path::PathBuf;

/// Root of the checked-in test data.
#[must_use]
pub fn testdata_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
}

/// Directory of captured attack-program reports, one file per trial.
#[must_use]
pub fn reports_dir() -> PathBuf {
    testdata_dir().join("reports")
}

/// Expected averages over [`reports_dir`].
#[must_use]
pub fn golden_summary_path() -> PathBuf {
    testdata_dir().join("golden_summary.json")
}
