//! Trial runners: the attack program itself, saved reports, and a
//! decorator that persists every report it passes through.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use hashbench_core::error::BenchError;

use crate::interfaces::TrialRunner;

/// Runs the attack program once per trial and captures its stdout.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: PathBuf,
    args: Vec<OsString>,
    workdir: Option<PathBuf>,
}

impl ProcessRunner {
    /// Run `program` with no arguments in the current directory.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            workdir: None,
        }
    }

    /// Pass extra arguments to the program.
    #[must_use]
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the program from `dir` instead of the current directory.
    #[must_use]
    pub fn with_workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Program path as it will be spawned.
    ///
    /// A relative path with a directory part (`./attack`) is resolved
    /// against the working directory; bare names go through `PATH`.
    #[must_use]
    pub fn resolved_program(&self) -> PathBuf {
        match &self.workdir {
            Some(dir) if self.program.is_relative() && self.program.components().count() > 1 => {
                dir.join(&self.program)
            }
            _ => self.program.clone(),
        }
    }
}

impl TrialRunner for ProcessRunner {
    fn run_trial(&self, trial: usize) -> Result<String, BenchError> {
        let program = self.resolved_program();
        let mut cmd = Command::new(&program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| BenchError::Spawn {
            program: program.display().to_string(),
            source,
        })?;

        if !output.status.success() {
            return Err(BenchError::ProcessFailure {
                trial,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| BenchError::InvalidOutput {
            trial,
            reason: e.to_string(),
        })
    }

    fn describe(&self) -> String {
        self.resolved_program().display().to_string()
    }
}

/// Replays reports saved by an earlier run, one file per trial.
#[derive(Debug, Clone)]
pub struct ReplayRunner {
    reports: Vec<PathBuf>,
}

impl ReplayRunner {
    /// Collect every `*.txt` file in `dir`, in lexical order.
    pub fn from_dir(dir: &Path) -> Result<Self, BenchError> {
        let mut reports = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
                reports.push(path);
            }
        }
        reports.sort();
        Ok(Self { reports })
    }

    /// Replay the given files in order.
    #[must_use]
    pub fn from_files(reports: Vec<PathBuf>) -> Self {
        Self { reports }
    }

    /// Number of saved reports, i.e. the number of trials to replay.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether there is nothing to replay.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl TrialRunner for ReplayRunner {
    fn run_trial(&self, trial: usize) -> Result<String, BenchError> {
        let path = trial
            .checked_sub(1)
            .and_then(|i| self.reports.get(i))
            .ok_or_else(|| BenchError::InvalidOutput {
                trial,
                reason: "no saved report for this trial".into(),
            })?;
        std::fs::read_to_string(path).map_err(|e| BenchError::InvalidOutput {
            trial,
            reason: format!("{}: {e}", path.display()),
        })
    }

    fn describe(&self) -> String {
        format!("replay of {} saved reports", self.reports.len())
    }
}

/// Saves each successful report to `dir/trial-NNN.txt` before handing it on.
pub struct RecordingRunner<R> {
    inner: R,
    dir: PathBuf,
}

impl<R: TrialRunner> RecordingRunner<R> {
    /// Wrap `inner`, creating `dir` if needed.
    pub fn new(inner: R, dir: impl Into<PathBuf>) -> Result<Self, BenchError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { inner, dir })
    }

    /// Path the report of `trial` is written to.
    #[must_use]
    pub fn report_path(&self, trial: usize) -> PathBuf {
        self.dir.join(format!("trial-{trial:03}.txt"))
    }
}

impl<R: TrialRunner> TrialRunner for RecordingRunner<R> {
    fn run_trial(&self, trial: usize) -> Result<String, BenchError> {
        let output = self.inner.run_trial(trial)?;
        std::fs::write(self.report_path(trial), &output)?;
        Ok(output)
    }

    fn describe(&self) -> String {
        format!("{} (saving to {})", self.inner.describe(), self.dir.display())
    }
}
