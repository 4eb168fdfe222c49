//! # hashbench-orchestration
//!
//! Trial execution loop, attack-program runners, and result interfaces.

pub mod interfaces;
pub mod orchestrator;
pub mod runner;

pub use interfaces::{NullObserver, ResultPresenter, RunReport, TrialObserver, TrialRunner};
pub use orchestrator::{run_trials, run_trials_with_observer};
pub use runner::{ProcessRunner, RecordingRunner, ReplayRunner};
